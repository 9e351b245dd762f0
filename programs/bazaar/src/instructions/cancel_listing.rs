use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount, Token, TokenAccount, Transfer};
use crate::error::BazaarError;
use crate::state::Listing;

/// Cancel an open listing: return the NFT from escrow to the seller and
/// close both the escrow and the listing, refunding rent to the seller.
#[derive(Accounts)]
pub struct CancelListing<'info> {
    #[account(
        mut,
        close = seller,
        seeds = [b"listing", listing.seller.as_ref(), listing.asset_mint.as_ref()],
        bump = listing.bump,
        constraint = listing.seller == seller.key() @ BazaarError::Unauthorized
    )]
    pub listing: Account<'info, Listing>,

    #[account(
        mut,
        constraint = escrow.key() == listing.escrow @ BazaarError::ListingNotFound,
        constraint = escrow.amount == 1 @ BazaarError::ListingNotFound
    )]
    pub escrow: Account<'info, TokenAccount>,

    #[account(mut)]
    pub seller: Signer<'info>,

    /// Seller's token account to receive the NFT back
    #[account(
        mut,
        constraint = seller_token_account.owner == seller.key() @ BazaarError::Unauthorized,
        constraint = seller_token_account.mint == listing.asset_mint @ BazaarError::AssetNotHeldBySeller
    )]
    pub seller_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<CancelListing>) -> Result<()> {
    let listing = &ctx.accounts.listing;

    let seeds = &[
        b"listing".as_ref(),
        listing.seller.as_ref(),
        listing.asset_mint.as_ref(),
        &[listing.bump],
    ];
    let signer = &[&seeds[..]];

    // Return the NFT to the seller, signed by the listing PDA
    let cpi_accounts = Transfer {
        from: ctx.accounts.escrow.to_account_info(),
        to: ctx.accounts.seller_token_account.to_account_info(),
        authority: ctx.accounts.listing.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer,
    );
    token::transfer(cpi_ctx, 1)?;

    // Close the emptied escrow, rent to seller
    let cpi_close = CloseAccount {
        account: ctx.accounts.escrow.to_account_info(),
        destination: ctx.accounts.seller.to_account_info(),
        authority: ctx.accounts.listing.to_account_info(),
    };
    let cpi_ctx_close = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_close,
        signer,
    );
    token::close_account(cpi_ctx_close)?;

    msg!(
        "Listing cancelled: seller={}, mint={}",
        listing.seller,
        listing.asset_mint
    );

    // Listing account closes automatically (close = seller)
    Ok(())
}
