pub mod chrome;
pub mod content;
pub mod host;
pub mod layout;
pub mod surface;

pub use chrome::*;
pub use content::*;
pub use host::*;
pub use layout::*;
pub use surface::*;
