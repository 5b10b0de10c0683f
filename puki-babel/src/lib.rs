//! PukiWiki to Hugo Markdown conversion
//!
//!     This crate converts pages written in PukiWiki markup into the Markdown/HTML mix Hugo
//!     renders, and carries the thin layers around that conversion: reading a PukiWiki data
//!     directory and writing a Hugo content tree.
//!
//!     TLDR:
//!         - The conversion is a linear rewrite, not a parser. Each rule is a `&str -> String`
//!           function and the pipeline threads one page through all of them in a fixed order.
//!         - Rules never fail. Only the file system collaborators (source, publish) return errors.
//!         - When a rule needs to see what an earlier one produced (tables undo emphasis in row
//!           tails, list detection skips converted headings), that dependency is on the order in
//!           pipeline.rs. Do not reorder stages without running the conversion table tests.
//!
//! Architecture
//!
//!     This is a pure lib: it powers the puki-cli but is shell agnostic, so no code here should
//!     print to std streams or read env vars. Logging goes through the `log` facade.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # BabelError
//!     ├── slug.rs                 # page name -> URL-safe slug
//!     ├── page.rs                 # Page value object
//!     ├── rules                   # one module per markup concern
//!     │   ├── macros.rs           # &br; &size &color &new &counter, #freeze #author #recent
//!     │   ├── headings.rs
//!     │   ├── links.rs
//!     │   ├── emphasis.rs
//!     │   ├── lists.rs            # - and + lists, one state machine for both
//!     │   ├── blockquote.rs
//!     │   └── tables.rs           # pipe tables, row tails, alignment residue
//!     ├── pipeline.rs             # ordered stage table, convert / convert_through / trace
//!     ├── source.rs               # <root>/wiki/<HEX>.txt ingestion, default page lookup
//!     └── publish.rs              # Hugo content tree, front matter, gone redirects
//!
//! Testing
//!     tests
//!     ├── conversion             # end to end conversion table, properties, kitchensink
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include
//!     these in the mod.
//!
//! Core Algorithms
//!
//!     Lists are the only stateful rule: a small state machine tracks whether we are outside a
//!     list, inside one, or absorbing continuation lines of the previous item (see
//!     rules/lists.rs). Tables gather runs of `|` lines, rebuild each row from cleaned cells and
//!     move any text after the final pipe below the table. Tail separation runs twice since
//!     alignment cleanup can glue a line back onto a row.

pub mod error;
pub mod page;
pub mod pipeline;
pub mod publish;
pub mod rules;
pub mod slug;
pub mod source;

pub use error::BabelError;
pub use page::Page;
pub use pipeline::{convert, convert_through, trace, StageSnapshot, STAGES};
pub use publish::{publish_site, PublishReport, RedirectLayout, SiteLayout};
pub use slug::slugify;
pub use source::{default_page, read_pages, SourceLayout};
