pub mod evaluate;
pub mod select;
