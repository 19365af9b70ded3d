// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests assert on known-good fixtures
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! First-person fly camera for real-time 3D rendering.
//!
//! The camera keeps an eye position plus yaw/pitch angles, derives an
//! orthonormal view basis from them, and hands the render loop a look-at
//! view matrix and a perspective projection each frame.
//!
//! # Key entry points
//!
//! - [`camera::OrientedCamera`] - the camera and its view/projection math
//! - [`input::InputProcessor`] - raw window events to camera commands
//! - [`session::FlySession`] - camera, input and frame clock stepped together
//! - [`options::Options`] - camera and key-binding configuration (TOML)
//!
//! # Frame flow
//!
//! Pointer, scroll and resize events become [`camera::CameraCommand`]s as
//! they arrive. Movement keys are held state, polled once per frame with
//! that frame's elapsed time. The render loop then reads
//! [`session::FrameMatrices`] (or a packed [`camera::CameraUniform`]).

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod script;
pub mod session;
pub mod util;

pub use error::FlycamError;
