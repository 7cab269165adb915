//! Validator and converter pairs, one module per supported tool.

pub mod phan;
pub mod php_codesniffer;
pub mod phplint;
pub mod phpmd;
pub mod phpstan;
pub mod psalm;

pub use phan::{PhanConverter, PhanValidator};
pub use php_codesniffer::{PhpCodeSnifferConverter, PhpCodeSnifferValidator};
pub use phplint::{PhpLintConverter, PhpLintValidator};
pub use phpmd::{PhpMdConverter, PhpMdValidator};
pub use phpstan::{PhpStanConverter, PhpStanValidator};
pub use psalm::{PsalmConverter, PsalmValidator};
