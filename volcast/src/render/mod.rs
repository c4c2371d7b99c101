mod compositing;
mod render_state;
mod renderer;

pub use compositing::RayAccumulator;
pub use render_state::{Policy, RenderState, RenderStateBuilder};
pub use renderer::Renderer;
