use anchor_lang::solana_program::program_option::COption;
use anchor_lang::solana_program::program_pack::Pack;
use anchor_lang::solana_program::pubkey::Pubkey;
use anchor_spl::token_2022::spl_token_2022::{
    extension::{
        mint_close_authority::MintCloseAuthority, transfer_fee::TransferFeeConfig, ExtensionType,
        BaseStateWithExtensionsMut, StateWithExtensionsMut,
    },
    state::Mint,
};

use crate::error::RevenueDistributorError;
use crate::utils::ensure_supported_mint;

use super::assert_error;

fn base_mint() -> Mint {
    Mint {
        mint_authority: COption::Some(Pubkey::new_unique()),
        supply: 1_000_000,
        decimals: 6,
        is_initialized: true,
        freeze_authority: COption::None,
    }
}

fn legacy_mint_data() -> Vec<u8> {
    let mut data = vec![0u8; Mint::LEN];
    Mint::pack(base_mint(), &mut data).unwrap();
    data
}

fn extended_mint_data(extension: ExtensionType) -> Vec<u8> {
    let len = ExtensionType::try_calculate_account_len::<Mint>(&[extension]).unwrap();
    let mut data = vec![0u8; len];
    let mut state = StateWithExtensionsMut::<Mint>::unpack_uninitialized(&mut data).unwrap();
    match extension {
        ExtensionType::TransferFeeConfig => {
            state.init_extension::<TransferFeeConfig>(true).unwrap();
        }
        ExtensionType::MintCloseAuthority => {
            state.init_extension::<MintCloseAuthority>(true).unwrap();
        }
        other => panic!("unused extension {:?}", other),
    }
    state.base = base_mint();
    state.pack_base();
    state.init_account_type().unwrap();
    data
}

#[test]
fn test_legacy_mint_supported() {
    ensure_supported_mint(&legacy_mint_data()).unwrap();
}

#[test]
fn test_token_2022_mint_without_fee_supported() {
    ensure_supported_mint(&extended_mint_data(ExtensionType::MintCloseAuthority)).unwrap();
}

#[test]
fn test_transfer_fee_mint_rejected() {
    assert_error(
        ensure_supported_mint(&extended_mint_data(ExtensionType::TransferFeeConfig)),
        RevenueDistributorError::UnsupportedMintExtension,
    );
}

#[test]
fn test_uninitialized_mint_rejected() {
    assert!(ensure_supported_mint(&vec![0u8; Mint::LEN]).is_err());
}
