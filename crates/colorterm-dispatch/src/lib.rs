//! Mode routing and archive packaging for colorterm.
//!
//! `colorterm-dispatch` sits between a transport (the CLI, or any HTTP
//! front end) and `colorterm-render`. It turns a `generateMode` string and
//! a palette into a downloadable archive:
//!
//! 1. Parse the mode. Unknown modes fail with [`DispatchError::UnknownMode`]
//!    before any color is looked at.
//! 2. Convert and render the palette through the mode's target.
//! 3. Pack the mode's install guide ([`GUIDE_FILE_NAME`]) and the rendered
//!    document, in that order, into a zip.
//!
//! ```rust
//! use colorterm_dispatch::{Dispatcher, GenerateRequest};
//!
//! let request = GenerateRequest::from_json(r#"{
//!     "generateMode": "warp",
//!     "colors": {
//!         "foreground": "rgba(255, 255, 255, 1)",
//!         "background": "rgba(0, 0, 0, 1)",
//!         "link": "rgba(10, 20, 30, 1)"
//!     }
//! }"#).unwrap();
//!
//! let dispatcher = Dispatcher::builtin().unwrap();
//! let download = dispatcher.handle(&request).unwrap();
//! assert_eq!(download.content_type(), "application/zip");
//! assert_eq!(download.filename(), "colorterm.zip");
//! ```

mod dispatch;
mod error;
mod guides;
mod mode;
mod package;
mod request;

pub use dispatch::{Dispatcher, DEFAULT_ARCHIVE_NAME};
pub use error::DispatchError;
pub use guides::{InstallGuides, GUIDE_FILE_NAME};
pub use mode::Mode;
pub use package::{Download, Packager, PackagingError, ZipPackager, ZIP_CONTENT_TYPE};
pub use request::GenerateRequest;
