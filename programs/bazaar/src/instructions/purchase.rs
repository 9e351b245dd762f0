use anchor_lang::prelude::*;
use anchor_lang::solana_program::{program::invoke, system_instruction};
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, CloseAccount, Mint, Token, TokenAccount, Transfer},
};
use crate::error::BazaarError;
use crate::state::{compute_fee_split, Config, Listing};

/// Buy a listed NFT. Payment split, asset release, and account closures all
/// happen inside one transaction; a racing purchase or cancel loses the
/// account lock and aborts against the already-closed listing.
#[derive(Accounts)]
pub struct Purchase<'info> {
    #[account(
        mut,
        close = seller,
        seeds = [b"listing", listing.seller.as_ref(), listing.asset_mint.as_ref()],
        bump = listing.bump
    )]
    pub listing: Account<'info, Listing>,

    /// Escrow custodying the NFT for this listing
    #[account(
        mut,
        constraint = escrow.key() == listing.escrow @ BazaarError::ListingNotFound,
        constraint = escrow.amount == 1 @ BazaarError::ListingNotFound
    )]
    pub escrow: Account<'info, TokenAccount>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    /// Buyer's token account to receive the NFT
    #[account(
        init,
        payer = buyer,
        associated_token::mint = asset_mint,
        associated_token::authority = buyer
    )]
    pub buyer_token_account: Account<'info, TokenAccount>,

    /// CHECK: receives payment and rent refunds; validated via listing.seller
    #[account(
        mut,
        constraint = seller.key() == listing.seller @ BazaarError::Unauthorized
    )]
    pub seller: UncheckedAccount<'info>,

    #[account(constraint = asset_mint.key() == listing.asset_mint @ BazaarError::ListingNotFound)]
    pub asset_mint: Account<'info, Mint>,

    #[account(
        seeds = [b"config"],
        bump = config.bump
    )]
    pub config: Account<'info, Config>,

    /// CHECK: validated via config.fee_destination
    #[account(
        mut,
        constraint = fee_destination.key() == config.fee_destination
    )]
    pub fee_destination: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn handler(ctx: Context<Purchase>) -> Result<()> {
    let price = ctx.accounts.listing.price;

    require!(
        ctx.accounts.buyer.lamports() >= price,
        BazaarError::InsufficientFunds
    );

    let (fee, seller_amount) = compute_fee_split(price, ctx.accounts.config.fee_bps)?;

    msg!(
        "Payment breakdown: price={}, fee={}, seller={}",
        price,
        fee,
        seller_amount
    );

    // Pay the seller
    if seller_amount > 0 {
        invoke(
            &system_instruction::transfer(
                ctx.accounts.buyer.key,
                ctx.accounts.seller.key,
                seller_amount,
            ),
            &[
                ctx.accounts.buyer.to_account_info(),
                ctx.accounts.seller.to_account_info(),
                ctx.accounts.system_program.to_account_info(),
            ],
        )?;
    }

    // Pay the marketplace fee
    if fee > 0 {
        invoke(
            &system_instruction::transfer(
                ctx.accounts.buyer.key,
                ctx.accounts.fee_destination.key,
                fee,
            ),
            &[
                ctx.accounts.buyer.to_account_info(),
                ctx.accounts.fee_destination.to_account_info(),
                ctx.accounts.system_program.to_account_info(),
            ],
        )?;
    }

    // Release the NFT from escrow to the buyer, signed by the listing PDA
    let listing = &ctx.accounts.listing;
    let seeds = &[
        b"listing".as_ref(),
        listing.seller.as_ref(),
        listing.asset_mint.as_ref(),
        &[listing.bump],
    ];
    let signer = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.escrow.to_account_info(),
        to: ctx.accounts.buyer_token_account.to_account_info(),
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
        "Purchase completed: buyer={}, seller={}, price={}",
        ctx.accounts.buyer.key(),
        listing.seller,
        price
    );

    // Listing account closes automatically (close = seller)
    Ok(())
}
