pub mod buffer;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod shadow;
pub mod style_sheet;
pub mod terminal;
pub mod text;
pub mod text_input;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use hit::hit_test;
pub use layout::{layout, LayoutResult, Rect};
pub use render::render_to_buffer;
pub use shadow::ShadowRoot;
pub use style_sheet::{Declarations, Rule, Selector, StyleSheet};
pub use terminal::Terminal;
pub use text_input::{TextEditResult, TextInputData};
pub use types::*;
