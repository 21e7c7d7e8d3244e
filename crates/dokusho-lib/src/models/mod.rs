pub mod source_info;
pub use source_info::*;

pub mod manga_info;
pub use manga_info::*;

pub mod chapter_info;
pub use chapter_info::*;

pub mod page;
pub use page::*;

pub mod input;
pub use input::*;

pub mod preference;
pub use preference::*;

pub mod version;
pub use version::*;
