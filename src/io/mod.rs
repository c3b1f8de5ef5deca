pub mod stl;

pub use stl::{
    convert_binary_stl_to_ascii, parse_ascii_stl, read_binary_stl, transcode_binary_stl,
    write_ascii_stl,
};
