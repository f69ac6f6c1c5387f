#[doc(hidden)]
pub mod definition;
#[doc(hidden)]
pub mod implementation;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use definition::Scan;
