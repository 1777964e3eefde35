//! STL emission for the combined triangle list
//!
//! STL (STereoLithography) stores a plain triangle soup, which is exactly
//! what the mesh combiner produces. Both the binary layout (80-byte header,
//! little-endian u32 count, 50 bytes per facet) and the ASCII layout are
//! supported; binary is the default for the CLI. Facet normals are computed
//! from the winding edges since the model itself carries no normals.

use crate::error::{Error, Result};
use crate::model::Triangle;
use std::io::Write;

const SOLID_NAME: &str = "skinmesh";

/// Unit facet normal from the triangle's winding (right-hand rule)
///
/// Degenerate triangles fall back to +z so the output stays well-formed.
fn facet_normal(triangle: &Triangle) -> [f64; 3] {
    let [v1, v2, v3] = triangle;
    let edge1 = (v2.x - v1.x, v2.y - v1.y, v2.z - v1.z);
    let edge2 = (v3.x - v1.x, v3.y - v1.y, v3.z - v1.z);
    let normal = (
        edge1.1 * edge2.2 - edge1.2 * edge2.1,
        edge1.2 * edge2.0 - edge1.0 * edge2.2,
        edge1.0 * edge2.1 - edge1.1 * edge2.0,
    );
    let length = (normal.0 * normal.0 + normal.1 * normal.1 + normal.2 * normal.2).sqrt();
    if length > 0.0 {
        [normal.0 / length, normal.1 / length, normal.2 / length]
    } else {
        [0.0, 0.0, 1.0]
    }
}

/// Write the triangle list as a binary STL stream
///
/// # Errors
/// Returns [`Error::Io`] on write failure and [`Error::InvalidGeometry`]
/// when the triangle count exceeds the format's u32 limit.
pub fn write_stl_binary<W: Write>(mut writer: W, triangles: &[Triangle]) -> Result<()> {
    let mut header = [0u8; 80];
    let tag = b"skinmesh binary STL";
    header[..tag.len()].copy_from_slice(tag);
    writer.write_all(&header)?;

    let count = u32::try_from(triangles.len()).map_err(|_| {
        Error::InvalidGeometry(format!(
            "triangle count {} exceeds the binary STL limit",
            triangles.len()
        ))
    })?;
    writer.write_all(&count.to_le_bytes())?;

    for triangle in triangles {
        for component in facet_normal(triangle) {
            writer.write_all(&(component as f32).to_le_bytes())?;
        }
        for vertex in triangle {
            for component in [vertex.x, vertex.y, vertex.z] {
                writer.write_all(&(component as f32).to_le_bytes())?;
            }
        }
        // Attribute byte count, always zero
        writer.write_all(&0u16.to_le_bytes())?;
    }
    Ok(())
}

/// Write the triangle list as an ASCII STL stream
///
/// # Errors
/// Returns [`Error::Io`] on write failure.
pub fn write_stl_ascii<W: Write>(mut writer: W, triangles: &[Triangle]) -> Result<()> {
    writeln!(writer, "solid {}", SOLID_NAME)?;
    for triangle in triangles {
        let normal = facet_normal(triangle);
        writeln!(
            writer,
            "  facet normal {:.6e} {:.6e} {:.6e}",
            normal[0], normal[1], normal[2]
        )?;
        writeln!(writer, "    outer loop")?;
        for vertex in triangle {
            writeln!(
                writer,
                "      vertex {:.6e} {:.6e} {:.6e}",
                vertex.x, vertex.y, vertex.z
            )?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }
    writeln!(writer, "endsolid {}", SOLID_NAME)?;
    Ok(())
}
