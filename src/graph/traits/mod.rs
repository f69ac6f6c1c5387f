mod proximity;

pub use proximity::Scan;
