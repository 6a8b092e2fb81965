// Server-side HTML rendering for the catalog page.

pub mod page;
