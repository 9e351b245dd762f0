use anchor_lang::prelude::*;

use crate::state::{
    compute_fee_split, validate_fee_bps, validate_price, Config, Listing, MAX_FEE_BPS,
};

#[test]
fn test_config_account_size() {
    // discriminator + authority + fee_bps + fee_destination + bump
    assert_eq!(Config::LEN, 8 + 32 + 2 + 32 + 1);
    assert_eq!(Config::LEN, 75);
}

#[test]
fn test_listing_account_size() {
    // discriminator + seller + asset_mint + price + escrow + bump
    assert_eq!(Listing::LEN, 8 + 32 + 32 + 8 + 32 + 1);
    assert_eq!(Listing::LEN, 113);
}

#[test]
fn test_fee_split_worked_example() {
    // 1 SOL at 2.5%
    let (fee, seller_amount) = compute_fee_split(1_000_000_000, 250).unwrap();
    assert_eq!(fee, 25_000_000);
    assert_eq!(seller_amount, 975_000_000);
}

#[test]
fn test_fee_split_conserves_price() {
    for &price in &[1u64, 999, 10_000, 1_000_000_000, u64::MAX] {
        for &fee_bps in &[0u16, 1, 250, 9_999, 10_000] {
            let (fee, seller_amount) = compute_fee_split(price, fee_bps).unwrap();
            assert_eq!(fee as u128 + seller_amount as u128, price as u128);
            assert_eq!(
                fee as u128,
                (price as u128) * (fee_bps as u128) / 10_000
            );
        }
    }
}

#[test]
fn test_fee_split_boundaries() {
    // Zero fee sends everything to the seller
    assert_eq!(compute_fee_split(777, 0).unwrap(), (0, 777));

    // 100% fee sends everything to the fee destination
    assert_eq!(compute_fee_split(777, 10_000).unwrap(), (777, 0));

    // Truncation rounds the fee down, in the seller's favor
    assert_eq!(compute_fee_split(9_999, 1).unwrap(), (0, 9_999));
}

#[test]
fn test_fee_bps_bounds() {
    assert!(validate_fee_bps(0).is_ok());
    assert!(validate_fee_bps(250).is_ok());
    assert!(validate_fee_bps(MAX_FEE_BPS).is_ok());
    assert!(validate_fee_bps(10_001).is_err());
    assert!(validate_fee_bps(u16::MAX).is_err());
}

#[test]
fn test_price_must_be_positive() {
    assert!(validate_price(0).is_err());
    assert!(validate_price(1).is_ok());
    assert!(validate_price(u64::MAX).is_ok());
}

fn listing_address(seller: &Pubkey, asset_mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[b"listing", seller.as_ref(), asset_mint.as_ref()],
        &crate::ID,
    )
    .0
}

#[test]
fn test_listing_derivation_is_deterministic() {
    let seller = Pubkey::new_unique();
    let mint = Pubkey::new_unique();
    assert_eq!(
        listing_address(&seller, &mint),
        listing_address(&seller, &mint)
    );
}

#[test]
fn test_listing_derivation_is_distinct_per_seed_tuple() {
    let seller_a = Pubkey::new_unique();
    let seller_b = Pubkey::new_unique();
    let mint_a = Pubkey::new_unique();
    let mint_b = Pubkey::new_unique();

    let same_seller_other_mint = listing_address(&seller_a, &mint_b);
    let other_seller_same_mint = listing_address(&seller_b, &mint_a);
    let base = listing_address(&seller_a, &mint_a);

    assert_ne!(base, same_seller_other_mint);
    assert_ne!(base, other_seller_same_mint);
    assert_ne!(same_seller_other_mint, other_seller_same_mint);
}

#[test]
fn test_config_derivation_is_global_singleton() {
    let a = Pubkey::find_program_address(&[b"config"], &crate::ID).0;
    let b = Pubkey::find_program_address(&[b"config"], &crate::ID).0;
    assert_eq!(a, b);
}
