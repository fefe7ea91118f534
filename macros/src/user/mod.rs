//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[host_functions]` | on inherent impl | Describe functions for validation and invocation |
//! | `#[host(...)]` | on fn inside it | `rename = "..."` or `skip` |

mod host_functions;

pub use host_functions::expand_host_functions;
