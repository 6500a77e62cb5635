pub mod form;
pub mod preview;
pub mod sections;
pub mod tabs;
