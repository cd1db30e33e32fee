mod pointer;

pub use pointer::wire_click;
