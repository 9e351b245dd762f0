use anchor_lang::prelude::*;

#[error_code]
pub enum BazaarError {
    #[msg("Signer does not match the required authority or seller")]
    Unauthorized,

    #[msg("Price must be greater than zero")]
    InvalidPrice,

    #[msg("Fee must not exceed 10000 basis points")]
    InvalidFeeBps,

    #[msg("Seller does not hold exactly 1 unit of the asset")]
    AssetNotHeldBySeller,

    #[msg("A listing already exists for this seller and asset")]
    AlreadyListed,

    #[msg("Listing does not exist (already sold or cancelled)")]
    ListingNotFound,

    #[msg("Marketplace config is already initialized")]
    AccountAlreadyInitialized,

    #[msg("Buyer balance does not cover the listing price")]
    InsufficientFunds,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
