//! Free-look camera.
//!
//! The camera composes the primitive transforms into the view and projection
//! matrices uploaded by the renderer. View space is right-handed with the
//! camera looking down the negative z-axis.

use crate::{
    angle::{Angle, Degrees, Radians},
    matrix::{Matrix3x3, Matrix4x4},
    vector::{Vec3, Vec4},
};
use anyhow::{Result, ensure};
use std::f32::consts::FRAC_PI_2;

/// Configuration parameters for a [`FreeLookCamera`].
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[derive(Clone, Debug, PartialEq)]
pub struct FreeLookConfig {
    /// Vertical field of view of the perspective projection.
    pub vertical_field_of_view: Degrees,
    /// Distance to the near clipping plane.
    pub near_distance: f32,
    /// Distance to the far clipping plane.
    pub far_distance: f32,
    /// Factor applied to every translation of the camera.
    pub movement_speed: f32,
    /// Factor applied to every rotation of the camera.
    pub rotation_speed: f32,
    /// Shear applied to view-space x- and y-coordinates in proportion to
    /// depth before projection.
    pub skew: [f32; 2],
}

/// A camera that can be moved and rotated freely through the scene.
#[derive(Clone, Debug)]
pub struct FreeLookCamera {
    config: FreeLookConfig,
    position: Vec3,
    yaw: Radians,
    pitch: Radians,
    roll: Radians,
}

impl FreeLookConfig {
    /// Checks that the configuration describes a valid perspective
    /// projection.
    ///
    /// # Errors
    /// Returns an error if the field of view is not strictly between 0 and 180
    /// degrees, if the near distance is not positive, if the far distance
    /// does not exceed the near distance or if any speed or skew is not
    /// finite.
    pub fn validate(&self) -> Result<()> {
        let fov = self.vertical_field_of_view.degrees();
        ensure!(
            fov > 0.0 && fov < 180.0,
            "Vertical field of view must be between 0 and 180 degrees, got {fov}"
        );
        ensure!(
            self.near_distance > 0.0,
            "Near distance must be positive, got {}",
            self.near_distance
        );
        ensure!(
            self.far_distance > self.near_distance,
            "Far distance ({}) must exceed near distance ({})",
            self.far_distance,
            self.near_distance
        );
        ensure!(
            self.far_distance.is_finite(),
            "Far distance must be finite"
        );
        ensure!(
            self.movement_speed.is_finite() && self.rotation_speed.is_finite(),
            "Movement and rotation speeds must be finite"
        );
        ensure!(
            self.skew.iter().all(|skew| skew.is_finite()),
            "Skew must be finite, got {:?}",
            self.skew
        );
        Ok(())
    }

    /// Reads and validates a configuration from the RON file at the given
    /// path. Fields missing from the file take their default values.
    #[cfg(feature = "ron")]
    pub fn from_ron_file(file_path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Self = crate::io::parse_ron_file(file_path)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for FreeLookConfig {
    fn default() -> Self {
        Self {
            vertical_field_of_view: Degrees(60.0),
            near_distance: 0.1,
            far_distance: 1000.0,
            movement_speed: 1.0,
            rotation_speed: 1.0,
            skew: [0.0; 2],
        }
    }
}

impl FreeLookCamera {
    /// Creates a camera at the origin looking down the negative z-axis.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid (see
    /// [`FreeLookConfig::validate`]).
    pub fn new(config: FreeLookConfig) -> Result<Self> {
        config.validate()?;
        log::debug!("Creating free-look camera with {config:?}");
        Ok(Self {
            config,
            position: Vec3::zeros(),
            yaw: Radians::zero(),
            pitch: Radians::zero(),
            roll: Radians::zero(),
        })
    }

    pub fn config(&self) -> &FreeLookConfig {
        &self.config
    }

    /// The position of the camera in world space.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Rotation about the vertical axis.
    pub fn yaw(&self) -> Radians {
        self.yaw
    }

    /// Rotation about the horizontal axis, in the range [-π/2, π/2].
    pub fn pitch(&self) -> Radians {
        self.pitch
    }

    /// Rotation about the viewing direction.
    pub fn roll(&self) -> Radians {
        self.roll
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Sets the orientation angles directly, without applying the rotation
    /// speed. The pitch is clamped to [-π/2, π/2].
    pub fn set_orientation(&mut self, yaw: impl Angle, pitch: impl Angle, roll: impl Angle) {
        self.yaw = yaw.as_radians();
        self.pitch = clamped_pitch(pitch.radians());
        self.roll = roll.as_radians();
    }

    /// Moves the camera back to the origin and clears its rotation.
    pub fn reset(&mut self) {
        log::trace!("Resetting free-look camera");
        self.position = Vec3::zeros();
        self.yaw = Radians::zero();
        self.pitch = Radians::zero();
        self.roll = Radians::zero();
    }

    /// Moves the camera by the given offset expressed in view space, scaled
    /// by the movement speed. An offset along the negative z-axis moves the
    /// camera forward.
    pub fn move_local(&mut self, offset: &Vec3) {
        let world_offset = self.rotation().transposed() * (offset * self.config.movement_speed);
        self.position += world_offset;
    }

    /// Adds the given angles, scaled by the rotation speed, to the current
    /// orientation. The resulting pitch is clamped to [-π/2, π/2].
    pub fn rotate(&mut self, yaw: impl Angle, pitch: impl Angle, roll: impl Angle) {
        let speed = self.config.rotation_speed;
        self.yaw = self.yaw + yaw.as_radians() * speed;
        self.pitch = clamped_pitch(self.pitch.radians() + pitch.radians() * speed);
        self.roll = self.roll + roll.as_radians() * speed;
    }

    /// The rotation from world space to view space.
    pub fn rotation(&self) -> Matrix3x3 {
        Matrix3x3::rotate_z(self.roll.radians())
            * Matrix3x3::rotate_x(self.pitch.radians())
            * Matrix3x3::rotate_y(self.yaw.radians())
    }

    /// The transform from world space to view space.
    pub fn view_matrix(&self) -> Matrix4x4 {
        Matrix4x4::from_matrix33(&self.rotation()) * Matrix4x4::translate(&-self.position)
    }

    /// The transform from view space to clip space for a view plane with the
    /// given ratio of width to height.
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Matrix4x4 {
        let [skew_x, skew_y] = self.config.skew;
        Matrix4x4::perspective(
            self.config.vertical_field_of_view.radians(),
            aspect_ratio,
            self.config.near_distance,
            self.config.far_distance,
        ) * Matrix4x4::shear(skew_x, skew_y)
    }

    /// The transform from world space to clip space.
    pub fn view_projection_matrix(&self, aspect_ratio: f32) -> Matrix4x4 {
        self.projection_matrix(aspect_ratio) * self.view_matrix()
    }

    /// Transforms the given world-space point to homogeneous clip space.
    /// Divide by the w-component of the result to obtain normalized device
    /// coordinates.
    pub fn project_point(&self, point: &Vec3, aspect_ratio: f32) -> Vec4 {
        self.view_projection_matrix(aspect_ratio) * point.extended(1.0)
    }
}

fn clamped_pitch(pitch: f32) -> Radians {
    Radians(pitch.clamp(-FRAC_PI_2, FRAC_PI_2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    const EPSILON: f32 = 1e-5;

    fn camera() -> FreeLookCamera {
        FreeLookCamera::new(FreeLookConfig::default()).unwrap()
    }

    prop_compose! {
        fn position_strategy(max_coord: f32)(
            x in -max_coord..max_coord,
            y in -max_coord..max_coord,
            z in -max_coord..max_coord,
        ) -> Vec3 {
            Vec3::new(x, y, z)
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(FreeLookConfig::default().validate().is_ok());
    }

    #[test]
    fn config_with_far_distance_below_near_distance_is_invalid() {
        let config = FreeLookConfig {
            near_distance: 10.0,
            far_distance: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(FreeLookCamera::new(config).is_err());
    }

    #[test]
    fn config_with_nonpositive_near_distance_is_invalid() {
        let config = FreeLookConfig {
            near_distance: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_with_degenerate_field_of_view_is_invalid() {
        for fov in [0.0, 180.0, -30.0, f32::NAN] {
            let config = FreeLookConfig {
                vertical_field_of_view: Degrees(fov),
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn config_with_infinite_skew_is_invalid() {
        let config = FreeLookConfig {
            skew: [f32::INFINITY, 0.0],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn new_camera_has_identity_view() {
        assert_eq!(camera().view_matrix(), Matrix4x4::identity());
    }

    #[test]
    fn moving_forward_without_rotation_moves_along_negative_z() {
        let mut camera = FreeLookCamera::new(FreeLookConfig {
            movement_speed: 2.0,
            ..Default::default()
        })
        .unwrap();

        camera.move_local(&Vec3::new(0.0, 0.0, -1.0));

        assert_abs_diff_eq!(camera.position(), Vec3::new(0.0, 0.0, -2.0), epsilon = EPSILON);
    }

    #[test]
    fn moving_forward_after_quarter_yaw_moves_along_x() {
        let mut camera = camera();
        camera.rotate(Radians(FRAC_PI_2), Radians(0.0), Radians(0.0));

        camera.move_local(&Vec3::new(0.0, 0.0, -1.0));

        assert_abs_diff_eq!(camera.position(), Vec3::new(1.0, 0.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn rotation_is_scaled_by_rotation_speed() {
        let mut camera = FreeLookCamera::new(FreeLookConfig {
            rotation_speed: 0.5,
            ..Default::default()
        })
        .unwrap();

        camera.rotate(Degrees(90.0), Degrees(0.0), Degrees(-20.0));

        assert_abs_diff_eq!(camera.yaw(), Radians(PI / 4.0), epsilon = EPSILON);
        assert_abs_diff_eq!(camera.roll().degrees(), -10.0, epsilon = 1e-4);
    }

    #[test]
    fn pitch_is_clamped_to_straight_up_or_down() {
        let mut camera = camera();

        camera.rotate(Radians(0.0), Radians(3.0), Radians(0.0));
        assert_abs_diff_eq!(camera.pitch(), Radians(FRAC_PI_2));

        camera.set_orientation(Degrees(0.0), Degrees(-135.0), Degrees(0.0));
        assert_abs_diff_eq!(camera.pitch(), Radians(-FRAC_PI_2));
    }

    #[test]
    fn resetting_camera_restores_initial_state() {
        let mut camera = camera();
        camera.move_local(&Vec3::new(1.0, 2.0, 3.0));
        camera.rotate(Radians(1.0), Radians(0.5), Radians(0.2));

        camera.reset();

        assert_eq!(camera.position(), Vec3::zeros());
        assert_eq!(camera.yaw(), Radians(0.0));
        assert_eq!(camera.pitch(), Radians(0.0));
        assert_eq!(camera.roll(), Radians(0.0));
    }

    #[test]
    fn point_straight_ahead_at_near_distance_projects_to_near_plane() {
        let mut camera = camera();
        camera.set_position(Vec3::new(5.0, 0.0, 0.0));
        camera.set_orientation(Radians(FRAC_PI_2), Radians(0.0), Radians(0.0));

        let near_distance = camera.config().near_distance;
        let clip = camera.project_point(&Vec3::new(5.0 + near_distance, 0.0, 0.0), 16.0 / 9.0);
        let ndc = clip.xyz() / clip.w();

        assert_abs_diff_eq!(clip.w(), near_distance, epsilon = EPSILON);
        assert_abs_diff_eq!(ndc, Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-4);
    }

    #[test]
    fn point_behind_camera_gets_negative_w() {
        let camera = camera();
        let clip = camera.project_point(&Vec3::new(0.0, 0.0, 10.0), 1.0);
        assert!(clip.w() < 0.0);
    }

    #[test]
    fn skew_is_applied_before_projection() {
        let camera = FreeLookCamera::new(FreeLookConfig {
            skew: [0.25, -0.5],
            ..Default::default()
        })
        .unwrap();
        let config = camera.config();

        let expected = Matrix4x4::perspective(
            config.vertical_field_of_view.radians(),
            1.5,
            config.near_distance,
            config.far_distance,
        ) * Matrix4x4::shear(0.25, -0.5);

        assert_eq!(camera.projection_matrix(1.5), expected);
    }

    proptest! {
        #[test]
        fn view_matrix_maps_camera_position_to_origin(
            position in position_strategy(1e2),
            yaw in -PI..PI,
            pitch in -FRAC_PI_2..FRAC_PI_2,
            roll in -PI..PI,
        ) {
            let mut camera = camera();
            camera.set_position(position);
            camera.set_orientation(Radians(yaw), Radians(pitch), Radians(roll));

            let origin = camera.view_matrix().transform(&position, 1.0);

            assert_abs_diff_eq!(origin, Vec3::zeros(), epsilon = 1e-3);
        }

        #[test]
        fn moving_forward_increases_view_depth_of_old_position(
            yaw in -PI..PI,
            pitch in -1.5_f32..1.5,
        ) {
            let mut camera = camera();
            camera.set_orientation(Radians(yaw), Radians(pitch), Radians(0.0));
            let old_position = camera.position();

            camera.move_local(&Vec3::new(0.0, 0.0, -1.0));

            // The old position is now one unit behind the camera
            let in_view = camera.view_matrix().transform(&old_position, 1.0);
            assert_abs_diff_eq!(in_view, Vec3::new(0.0, 0.0, 1.0), epsilon = 1e-4);
        }
    }

    #[cfg(feature = "ron")]
    #[test]
    fn parsing_partial_ron_config_fills_in_defaults() {
        let config: FreeLookConfig =
            ron::from_str("(vertical_field_of_view: 90.0, near_distance: 0.5)").unwrap();

        assert_eq!(config.vertical_field_of_view, Degrees(90.0));
        assert_eq!(config.near_distance, 0.5);
        assert_eq!(config.far_distance, FreeLookConfig::default().far_distance);
        assert!(config.validate().is_ok());
    }
}
