//! # manifest-gui - Configuration forms from plugin manifests
//!
//! Renders one labelled HTML input per manifest property into a table body
//! and records each property's resolved default in a [`ConfigDefaults`]
//! mapping for the code that later handles submission.
//!
//! ## Input kinds
//!
//! - **object / array**: `<textarea>` holding the default as indented JSON
//! - **boolean**: checkbox, checked when the default is truthy
//! - **anything else**: text input holding the stringified default
//!
//! Every input carries `data-config-key`, `data-type` and the shared
//! `config-input` class so [`FormRenderer::collect_values`] can read the form
//! back without knowing its layout.
//!
//! ## Quick Start
//!
//! ```rust
//! use manifest_gui::{ConfigDefaults, Document, FormRenderer, Manifest};
//!
//! fn main() -> anyhow::Result<()> {
//!     let manifest = Manifest::from_json_str(
//!         r#"{"properties": {"greeting": {"type": "string", "default": "hello"}}}"#,
//!     )?;
//!
//!     let renderer = FormRenderer::default();
//!     let mut document = Document::form_shell(&renderer.settings().container_id);
//!     let mut defaults = ConfigDefaults::new();
//!     renderer.render_manifest(&mut document, &manifest, &mut defaults)?;
//!
//!     assert!(document.to_html().contains(r#"data-config-key="greeting""#));
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod dom;
pub mod domain;
pub mod error;
pub mod render;

pub use dom::{Document, Element, ElementKind};
pub use domain::{ConfigDefaults, DefaultEntry, Manifest, PropertyDescriptor, PropertyType};
pub use error::{FormError, FormResult};
pub use render::FormRenderer;
