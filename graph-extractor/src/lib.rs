/*!
Enumerates every strong transitive requires/excludes relationship between
the features of a CNF variability model (spec §1), via the parallel
backbone-based graph extractor of spec §2: a Reader, a Backbone Engine, an
Edge Extractor and a Parallel Driver, feeding an Output Writer.

The module layout mirrors `sat_core`'s own: a small top-level [Analysis]
entry point, with each pipeline stage in its own module.
*/

pub mod analysis;
pub mod backbone;
pub mod cli;
pub mod config;
pub mod driver;
pub mod extractor;
pub mod model;
pub mod progress;
pub mod reader;
pub mod types;
pub mod writer;

pub use analysis::Analysis;
pub use config::{Algorithm, Config};
pub use types::err::ErrorKind;
