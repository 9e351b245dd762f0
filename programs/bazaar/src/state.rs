use anchor_lang::prelude::*;

use crate::error::BazaarError;

/// Fee rates are expressed in basis points, 1/100 of a percent
pub const FEE_DENOMINATOR_BPS: u64 = 10_000;
pub const MAX_FEE_BPS: u16 = 10_000;

/// Marketplace configuration singleton
/// Seeds: [b"config"]
#[account]
pub struct Config {
    pub authority: Pubkey,        // May change the fee rate
    pub fee_bps: u16,             // Fee charged on every sale
    pub fee_destination: Pubkey,  // Receives the fee portion of each sale
    pub bump: u8,
}

impl Config {
    pub const LEN: usize = 8 +   // discriminator
        32 +                      // authority
        2 +                       // fee_bps
        32 +                      // fee_destination
        1;                        // bump
}

/// One open fixed-price offer
/// Seeds: [b"listing", seller, asset_mint]
///
/// The listing PDA is also the authority over the escrow token account, so
/// only this program (signing with the listing seeds) can release the NFT.
/// A listing exists iff its escrow holds the single token.
#[account]
pub struct Listing {
    pub seller: Pubkey,
    pub asset_mint: Pubkey,
    pub price: u64,              // Lamports required to purchase
    pub escrow: Pubkey,          // Token account custodying the NFT
    pub bump: u8,
}

impl Listing {
    pub const LEN: usize = 8 +   // discriminator
        32 +                      // seller
        32 +                      // asset_mint
        8 +                       // price
        32 +                      // escrow
        1;                        // bump
}

pub fn validate_fee_bps(fee_bps: u16) -> Result<()> {
    require!(fee_bps <= MAX_FEE_BPS, BazaarError::InvalidFeeBps);
    Ok(())
}

pub fn validate_price(price: u64) -> Result<()> {
    require!(price > 0, BazaarError::InvalidPrice);
    Ok(())
}

/// Split a sale price into (fee, seller_amount)
///
/// fee = floor(price * fee_bps / 10000), and fee + seller_amount == price
/// for every valid fee rate. Intermediate math is widened to u128 so the
/// product cannot wrap.
pub fn compute_fee_split(price: u64, fee_bps: u16) -> Result<(u64, u64)> {
    let fee = (price as u128)
        .checked_mul(fee_bps as u128)
        .ok_or(BazaarError::ArithmeticOverflow)?
        .checked_div(FEE_DENOMINATOR_BPS as u128)
        .ok_or(BazaarError::ArithmeticOverflow)? as u64;

    let seller_amount = price
        .checked_sub(fee)
        .ok_or(BazaarError::ArithmeticOverflow)?;

    Ok((fee, seller_amount))
}
