use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, Token, TokenAccount, Transfer},
};
use crate::error::BazaarError;
use crate::state::{validate_price, Listing};

/// Open a fixed-price offer. The listing record and its escrow are created
/// and the NFT deposited in one instruction, so a listing can never exist
/// without custody of the asset.
#[derive(Accounts)]
pub struct CreateListing<'info> {
    /// `init` collides if an offer for (seller, mint) is already open
    #[account(
        init,
        payer = seller,
        space = Listing::LEN,
        seeds = [b"listing", seller.key().as_ref(), asset_mint.key().as_ref()],
        bump
    )]
    pub listing: Account<'info, Listing>,

    /// Escrow holding the NFT for the listing's lifetime; its authority is
    /// the listing PDA, so no private key can ever move the token out
    #[account(
        init,
        payer = seller,
        associated_token::mint = asset_mint,
        associated_token::authority = listing
    )]
    pub escrow: Account<'info, TokenAccount>,

    #[account(mut)]
    pub seller: Signer<'info>,

    /// Standard SPL NFT: supply 1, no fractional units
    #[account(
        constraint = asset_mint.decimals == 0 @ BazaarError::AssetNotHeldBySeller,
        constraint = asset_mint.supply == 1 @ BazaarError::AssetNotHeldBySeller
    )]
    pub asset_mint: Account<'info, Mint>,

    /// Seller's token account currently holding the NFT
    #[account(
        mut,
        constraint = seller_token_account.owner == seller.key() @ BazaarError::AssetNotHeldBySeller,
        constraint = seller_token_account.mint == asset_mint.key() @ BazaarError::AssetNotHeldBySeller,
        constraint = seller_token_account.amount == 1 @ BazaarError::AssetNotHeldBySeller
    )]
    pub seller_token_account: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn handler(ctx: Context<CreateListing>, price: u64) -> Result<()> {
    validate_price(price)?;

    let listing = &mut ctx.accounts.listing;
    listing.seller = ctx.accounts.seller.key();
    listing.asset_mint = ctx.accounts.asset_mint.key();
    listing.price = price;
    listing.escrow = ctx.accounts.escrow.key();
    listing.bump = ctx.bumps.listing;

    // Deposit the NFT into escrow; if this fails the runtime rolls back the
    // listing and escrow allocations with it
    let cpi_accounts = Transfer {
        from: ctx.accounts.seller_token_account.to_account_info(),
        to: ctx.accounts.escrow.to_account_info(),
        authority: ctx.accounts.seller.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, 1)?;

    msg!(
        "Listing created: seller={}, mint={}, price={}",
        ctx.accounts.seller.key(),
        ctx.accounts.asset_mint.key(),
        price
    );
    Ok(())
}
