use anchor_lang::prelude::*;
use crate::state::{validate_fee_bps, Config};

/// One-time setup of the marketplace config. The `init` constraint makes a
/// second call fail at account creation, so the singleton cannot be
/// re-initialized.
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = Config::LEN,
        seeds = [b"config"],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Initialize>,
    fee_bps: u16,
    fee_destination: Pubkey,
) -> Result<()> {
    validate_fee_bps(fee_bps)?;

    let config = &mut ctx.accounts.config;
    config.authority = ctx.accounts.authority.key();
    config.fee_bps = fee_bps;
    config.fee_destination = fee_destination;
    config.bump = ctx.bumps.config;

    msg!(
        "Marketplace initialized: authority={}, fee={}bps, fee_destination={}",
        config.authority,
        fee_bps,
        fee_destination
    );
    Ok(())
}
