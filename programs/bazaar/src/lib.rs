use anchor_lang::prelude::*;

pub mod error;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("BUbjGkkoUYWVjDWYn9Yp9qgDaspMAt3rm91J7KKZpLZv");

#[program]
pub mod bazaar {
    use super::*;

    /// Initialize the marketplace configuration singleton
    pub fn initialize(
        ctx: Context<Initialize>,
        fee_bps: u16,
        fee_destination: Pubkey,
    ) -> Result<()> {
        initialize::handler(ctx, fee_bps, fee_destination)
    }

    /// List an NFT at a fixed price, moving it into program escrow
    pub fn create_listing(ctx: Context<CreateListing>, price: u64) -> Result<()> {
        create_listing::handler(ctx, price)
    }

    /// Cancel an open listing and reclaim the NFT from escrow
    pub fn cancel_listing(ctx: Context<CancelListing>) -> Result<()> {
        cancel_listing::handler(ctx)
    }

    /// Buy a listed NFT: pay seller and fee destination, receive the NFT
    pub fn purchase(ctx: Context<Purchase>) -> Result<()> {
        purchase::handler(ctx)
    }

    /// Change the marketplace fee rate (config authority only)
    pub fn update_fee(ctx: Context<UpdateFee>, fee_bps: u16) -> Result<()> {
        update_fee::handler(ctx, fee_bps)
    }
}

#[cfg(test)]
mod tests;
