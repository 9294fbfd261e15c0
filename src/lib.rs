//! Procedural particle-heart animation.
//!
//! A heart made of particles morphs from an opening silhouette into its final shape while a
//! field of decoration particles drifts out around it. Frames are written as numbered JPEG stills
//! and a strided, ping-ponged subset is reassembled into a looping GIF.
//!
//! # Pipeline overview
//!
//! 1. **Shapes**: two control polygons -> four [`Silhouette`]s (tiny, small, base, final), once
//! 2. **Pacing**: an easing curve -> one blend weight per frame ([`EasingTable`]), once
//! 3. **Particles**: per frame, heart and decoration particles from the morphed silhouette
//! 4. **Render**: particles -> styled [`Dot`]s -> RGB8 pixels ([`CpuRasterizer`])
//! 5. **Export**: numbered stills ([`FrameWriter`]), then the looping GIF ([`assemble_gif`])
//!
//! All randomness flows through an explicit [`ParticleRng`]; given the same code path every
//! frame is reproducible.
#![forbid(unsafe_code)]

pub mod animation;
pub mod curve;
pub mod encode;
pub mod foundation;
pub mod particles;
pub mod pipeline;
pub mod render;
pub mod shape;

pub use animation::ease::{DEFAULT_FRAMES, EasingTable};
pub use curve::bezier;
pub use encode::frames::{FrameWriter, frame_path};
pub use encode::gif::{GifConfig, assemble_gif, ping_pong, strided_indices};
pub use foundation::core::{Canvas, Fps, FrameIndex, Lerp, Point, Rect, Rgb8, Vec2};
pub use foundation::error::{HeartError, HeartResult};
pub use particles::decor::DecorParticle;
pub use particles::rng::ParticleRng;
pub use pipeline::{AnimationConfig, FrameParticles, HEIGHT, HeartAnimation, WIDTH};
pub use render::cpu::CpuRasterizer;
pub use render::{Dot, FrameRGB, Rasterizer};
pub use shape::library::ShapeLibrary;
pub use shape::silhouette::{ControlPolygon, DEFAULT_SAMPLES, Silhouette};
