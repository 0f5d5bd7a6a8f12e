use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::Context;
    use clap::{Args, Parser, Subcommand};
    use freelook_math::{Degrees, FreeLookCamera, FreeLookConfig, Vec3};
    use std::path::PathBuf;

    #[derive(Debug, Parser)]
    #[command(about = "Free-look camera transforms", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Print the row-major view-projection matrix of the camera
        ViewProjection {
            #[command(flatten)]
            camera: CameraArgs,
        },
        /// Print the clip-space and normalized device coordinates of a point
        Project {
            #[command(flatten)]
            camera: CameraArgs,

            /// World-space point to project, as x,y,z
            #[arg(
                long,
                required = true,
                value_delimiter = ',',
                allow_hyphen_values = true
            )]
            point: Vec<f32>,
        },
    }

    #[derive(Debug, Args)]
    struct CameraArgs {
        /// Path to a RON file with the camera configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// World-space camera position, as x,y,z
        #[arg(
            long,
            value_delimiter = ',',
            allow_hyphen_values = true,
            default_values_t = [0.0, 0.0, 0.0]
        )]
        position: Vec<f32>,

        /// Yaw in degrees
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        yaw: f32,

        /// Pitch in degrees
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        pitch: f32,

        /// Roll in degrees
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        roll: f32,

        /// Ratio of view plane width to height
        #[arg(short, long, default_value_t = 1.0)]
        aspect_ratio: f32,
    }

    impl CameraArgs {
        fn create_camera(&self) -> Result<FreeLookCamera> {
            let config = match &self.config {
                Some(path) => FreeLookConfig::from_ron_file(path)
                    .with_context(|| format!("Failed to load camera config from {}", path.display()))?,
                None => FreeLookConfig::default(),
            };

            let mut camera = FreeLookCamera::new(config)?;
            camera.set_position(parse_vec3("position", &self.position)?);
            camera.set_orientation(Degrees(self.yaw), Degrees(self.pitch), Degrees(self.roll));

            log::info!(
                "Using camera at {:?} with yaw {}°, pitch {}° and roll {}°",
                camera.position(),
                self.yaw,
                self.pitch,
                self.roll
            );
            Ok(camera)
        }
    }

    fn parse_vec3(name: &str, values: &[f32]) -> Result<Vec3> {
        match values {
            &[x, y, z] => Ok(Vec3::new(x, y, z)),
            _ => anyhow::bail!(
                "Expected three comma-separated values for {name}, got {}",
                values.len()
            ),
        }
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            Command::ViewProjection { camera } => {
                let aspect_ratio = camera.aspect_ratio;
                let matrix = camera.create_camera()?.view_projection_matrix(aspect_ratio);
                for row in matrix.as_array().chunks_exact(4) {
                    println!("{} {} {} {}", row[0], row[1], row[2], row[3]);
                }
            }
            Command::Project { camera, point } => {
                let point = parse_vec3("point", &point)?;
                let clip = camera.create_camera()?.project_point(&point, camera.aspect_ratio);
                println!("clip: {} {} {} {}", clip.x(), clip.y(), clip.z(), clip.w());

                if clip.w() > 0.0 {
                    let ndc = clip.xyz() / clip.w();
                    println!("ndc: {} {} {}", ndc.x(), ndc.y(), ndc.z());
                } else {
                    log::warn!("Point {point:?} lies behind the camera");
                }
            }
        }
        Ok(())
    }

}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
