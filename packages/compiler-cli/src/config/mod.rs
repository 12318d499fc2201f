pub mod docs;

pub use docs::DocsConfig;

#[cfg(test)]
mod test;
