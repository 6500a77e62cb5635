mod render;
pub mod template;

pub use render::{audience_instruction, generate_prompt, render_with, PromptStats, RenderOptions};
