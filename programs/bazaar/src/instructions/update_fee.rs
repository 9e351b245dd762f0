use anchor_lang::prelude::*;
use crate::error::BazaarError;
use crate::state::{validate_fee_bps, Config};

#[derive(Accounts)]
pub struct UpdateFee<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        constraint = config.authority == authority.key() @ BazaarError::Unauthorized
    )]
    pub config: Account<'info, Config>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<UpdateFee>, fee_bps: u16) -> Result<()> {
    validate_fee_bps(fee_bps)?;

    let config = &mut ctx.accounts.config;
    let previous = config.fee_bps;
    config.fee_bps = fee_bps;

    msg!("Fee updated: {}bps -> {}bps", previous, fee_bps);
    Ok(())
}
