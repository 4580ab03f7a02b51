//! Graph file I/O: binary .sweep files and text edge lists.

pub mod compression;
pub mod edgelist;
pub mod mmap;
pub mod reader;
pub mod writer;

pub use edgelist::{
    parse_edge_list, parse_edge_list_limited, read_edge_list, read_edge_list_limited,
    write_edge_list,
};
pub use mmap::MmapGraphReader;
pub use reader::GraphReader;
pub use writer::GraphWriter;
