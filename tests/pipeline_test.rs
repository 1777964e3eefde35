//! End-to-end pipeline tests: texture in, posed triangle list out

mod common;

use common::UniformTexture;
use skinmesh::{apply_pose, ArmVariant, Error, Pose, SegmentName, SkinModel};

/// Shell box count per segment for a fully opaque classic texture: the sum
/// of the six face rectangles' pixel counts.
fn classic_shell_count(name: SegmentName) -> usize {
    match name {
        // 6 faces x 8x8
        SegmentName::Head => 6 * 64,
        // front/back 8x12, left/right 4x12, top/bottom 8x4
        SegmentName::Torso => 2 * 96 + 2 * 48 + 2 * 32,
        // front/back 4x12, left/right 4x12, top/bottom 4x4
        SegmentName::RightArm
        | SegmentName::LeftArm
        | SegmentName::RightLeg
        | SegmentName::LeftLeg => 2 * 48 + 2 * 48 + 2 * 16,
    }
}

#[test]
fn test_opaque_classic_closed_form() {
    let texture = UniformTexture::opaque();
    let model = SkinModel::from_texture(&texture, ArmVariant::Classic).unwrap();

    assert_eq!(model.segments.len(), 6);
    for name in SegmentName::ALL {
        let segment = model.segment(name).unwrap();
        assert_eq!(
            segment.cuboids.len(),
            1 + classic_shell_count(name),
            "{:?}",
            name
        );
    }

    // 384 + 352 + 4 * 224 shell boxes + 6 base boxes
    assert_eq!(model.cuboid_count(), 1638);
    assert_eq!(model.combined_triangles().len(), 12 * 1638);
}

#[test]
fn test_opaque_slim_closed_form() {
    let texture = UniformTexture::opaque();
    let model = SkinModel::from_texture(&texture, ArmVariant::Slim).unwrap();

    // Slim arms: front/back 3x12, left/right 4x12, top/bottom 3x4
    let slim_arm = 2 * 36 + 2 * 48 + 2 * 12;
    for name in [SegmentName::RightArm, SegmentName::LeftArm] {
        assert_eq!(model.segment(name).unwrap().cuboids.len(), 1 + slim_arm);
    }
    // Non-arm segments match the classic counts
    for name in [SegmentName::Head, SegmentName::Torso, SegmentName::LeftLeg] {
        assert_eq!(
            model.segment(name).unwrap().cuboids.len(),
            1 + classic_shell_count(name)
        );
    }

    assert_eq!(model.cuboid_count(), 384 + 352 + 2 * 192 + 2 * 224 + 6);
}

#[test]
fn test_transparent_texture_leaves_base_boxes_only() {
    let texture = UniformTexture::transparent();
    let model = SkinModel::from_texture(&texture, ArmVariant::Classic).unwrap();

    for segment in &model.segments {
        assert_eq!(segment.cuboids.len(), 1, "{:?}", segment.name);
    }
    assert_eq!(model.combined_triangles().len(), 72);
}

#[test]
fn test_half_height_texture_fails_on_limb_overlays() {
    // A 64x32 raster carries only the upper layout half; the limb overlay
    // rectangles read below row 32 and must surface a bounds error rather
    // than produce a partial model.
    let texture = UniformTexture {
        width: 64,
        height: 32,
        alpha: 255,
    };
    let result = SkinModel::from_texture(&texture, ArmVariant::Classic);
    assert!(matches!(result, Err(Error::SourceBounds { .. })));
}

#[test]
fn test_pose_changes_only_posed_segments() {
    let texture = UniformTexture::opaque();
    let mut model = SkinModel::from_texture(&texture, ArmVariant::Classic).unwrap();
    let before = model.clone();

    let pose = Pose {
        head_x: 10.0,
        head_y: 15.0,
        right_leg_x: 90.0,
        ..Pose::default()
    };
    apply_pose(&mut model, &pose);

    for name in SegmentName::ALL {
        let changed =
            model.segment(name).unwrap().cuboids != before.segment(name).unwrap().cuboids;
        let expected = matches!(name, SegmentName::Head | SegmentName::RightLeg);
        assert_eq!(changed, expected, "{:?}", name);
    }

    // Posing never changes the box or triangle counts
    assert_eq!(model.cuboid_count(), before.cuboid_count());
    assert_eq!(
        model.combined_triangles().len(),
        before.combined_triangles().len()
    );
}

#[test]
fn test_default_pose_is_identity() {
    let texture = UniformTexture::opaque();
    let mut model = SkinModel::from_texture(&texture, ArmVariant::Classic).unwrap();
    let before = model.clone();

    apply_pose(&mut model, &Pose::default());

    for name in SegmentName::ALL {
        assert_eq!(
            model.segment(name).unwrap().cuboids,
            before.segment(name).unwrap().cuboids,
            "{:?}",
            name
        );
    }
}

#[test]
fn test_combined_order_is_stable() {
    let texture = UniformTexture::opaque();
    let model = SkinModel::from_texture(&texture, ArmVariant::Classic).unwrap();

    let first = model.combined_triangles();
    let second = model.combined_triangles();
    assert_eq!(first, second);

    // The first 12 triangles belong to the head's base box, which spans
    // z = 24..32 in the unposed figure.
    for triangle in &first[..12] {
        for vertex in triangle {
            assert!((24.0..=32.0).contains(&vertex.z));
        }
    }
}
