//! Command-line entry point: skin PNG in, posed STL out

use clap::Parser;
use skinmesh::{
    apply_pose, write_stl_ascii, write_stl_binary, ArmVariant, Pose, Result, SkinModel,
    SkinTexture,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process;

/// Generate a posable 3D model from a skin texture
#[derive(Debug, Parser)]
#[command(name = "skinmesh", version, about)]
struct Args {
    /// Input skin texture (PNG)
    #[arg(short, long, default_value = "skin.png")]
    input: PathBuf,

    /// Output STL file
    #[arg(short, long, default_value = "skin.stl")]
    output: PathBuf,

    /// Use the slim (3-pixel-wide arm) layout
    #[arg(long)]
    slim: bool,

    /// Write ASCII STL instead of binary
    #[arg(long)]
    ascii: bool,

    /// Head rotation about the x axis, in degrees
    #[arg(long, default_value_t = 0.0)]
    head_x: f64,

    /// Head rotation about the y axis, in degrees
    #[arg(long, default_value_t = 0.0)]
    head_y: f64,

    /// Head rotation about the z axis, in degrees
    #[arg(long, default_value_t = 0.0)]
    head_z: f64,

    /// Right arm rotation about the x axis, in degrees
    #[arg(long, default_value_t = 0.0)]
    right_arm_x: f64,

    /// Right arm rotation about the y axis, in degrees
    #[arg(long, default_value_t = 0.0)]
    right_arm_y: f64,

    /// Left arm rotation about the x axis, in degrees
    #[arg(long, default_value_t = 0.0)]
    left_arm_x: f64,

    /// Left arm rotation about the y axis, in degrees
    #[arg(long, default_value_t = 0.0)]
    left_arm_y: f64,

    /// Right leg rotation about the x axis, in degrees
    #[arg(long, default_value_t = 0.0)]
    right_leg_x: f64,

    /// Right leg rotation about the z axis, in degrees
    #[arg(long, default_value_t = 0.0)]
    right_leg_z: f64,

    /// Left leg rotation about the x axis, in degrees
    #[arg(long, default_value_t = 0.0)]
    left_leg_x: f64,

    /// Left leg rotation about the z axis, in degrees
    #[arg(long, default_value_t = 0.0)]
    left_leg_z: f64,
}

fn run(args: &Args) -> Result<()> {
    let texture = SkinTexture::open(&args.input)?;
    let variant = if args.slim {
        ArmVariant::Slim
    } else {
        ArmVariant::Classic
    };
    let mut model = SkinModel::from_texture(&texture, variant)?;

    let pose = Pose {
        head_x: args.head_x,
        head_y: args.head_y,
        head_z: args.head_z,
        right_arm_x: args.right_arm_x,
        right_arm_y: args.right_arm_y,
        left_arm_x: args.left_arm_x,
        left_arm_y: args.left_arm_y,
        right_leg_x: args.right_leg_x,
        right_leg_z: args.right_leg_z,
        left_leg_x: args.left_leg_x,
        left_leg_z: args.left_leg_z,
    };
    apply_pose(&mut model, &pose);

    let triangles = model.combined_triangles();

    // The output file is only created once the whole pipeline has
    // succeeded, so a failed run never leaves a model file behind.
    let mut writer = BufWriter::new(File::create(&args.output)?);
    if args.ascii {
        write_stl_ascii(&mut writer, &triangles)?;
    } else {
        write_stl_binary(&mut writer, &triangles)?;
    }
    writer.flush()?;

    println!("{}", args.output.display());
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
