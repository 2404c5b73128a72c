pub mod concat_string;
pub mod ecmascript;
pub mod indexmap;
