pub mod initialize_vault;
pub mod fund;
pub mod publish_root;
pub mod claim;
pub mod set_authority;

pub use initialize_vault::*;
pub use fund::*;
pub use publish_root::*;
pub use claim::*;
pub use set_authority::*;
