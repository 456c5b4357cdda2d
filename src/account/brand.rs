//! Wallet brand catalog and display ranking

use serde::{Deserialize, Serialize};

/// Rank of anything the catalog does not list
pub const DEFAULT_RANK: u64 = 100_000_000;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BrandCategory {
    Hardware,
    Mobile,
    Institutional,
}

impl BrandCategory {
    pub fn base(self) -> u64 {
        match self {
            BrandCategory::Hardware => 100,
            BrandCategory::Mobile => 10_000,
            BrandCategory::Institutional => 1_000_000,
        }
    }
}

/// Every brand or keyring class the manage-address view knows how to name and rank.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Brand {
    SeedPhrase,
    PrivateKey,
    // hardware
    Ledger,
    Trezor,
    GridPlus,
    OneKey,
    Keystone,
    BitBox02,
    Imkey,
    AirGap,
    CoolWallet,
    Ngrave,
    // institutional
    Safe,
    CoboArgus,
    Cobo,
    Fireblocks,
    Jade,
    Amber,
    MpcVault,
    // mobile
    MetaMask,
    TrustWallet,
    ImToken,
    TokenPocket,
    MathWallet,
    Rainbow,
    Zerion,
    Bitget,
    Uniswap,
    Coinbase,
    Watch,
    Unknown,
}

pub const HARDWARE_PRECEDENCE: &[Brand] = &[
    Brand::Ledger,
    Brand::Trezor,
    Brand::GridPlus,
    Brand::OneKey,
    Brand::Keystone,
    Brand::BitBox02,
    Brand::Imkey,
    Brand::AirGap,
    Brand::CoolWallet,
    Brand::Ngrave,
];

pub const INSTITUTIONAL_PRECEDENCE: &[Brand] = &[
    Brand::Safe,
    Brand::CoboArgus,
    Brand::Cobo,
    Brand::Fireblocks,
    Brand::Jade,
    Brand::Amber,
    Brand::MpcVault,
];

pub const MOBILE_PRECEDENCE: &[Brand] = &[
    Brand::MetaMask,
    Brand::TrustWallet,
    Brand::ImToken,
    Brand::TokenPocket,
    Brand::MathWallet,
    Brand::Rainbow,
    Brand::Zerion,
    Brand::Bitget,
    Brand::Uniswap,
    Brand::Coinbase,
];

impl Brand {
    /// Resolve a brand name or keyring label. Matching ignores ASCII case.
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_uppercase().as_str() {
            "HD KEY TREE" => Brand::SeedPhrase,
            "SIMPLE KEY PAIR" => Brand::PrivateKey,
            "LEDGER HARDWARE" | "LEDGER" => Brand::Ledger,
            "TREZOR HARDWARE" | "TREZOR" => Brand::Trezor,
            "GRIDPLUS HARDWARE" | "GRIDPLUS" => Brand::GridPlus,
            "ONEKEY HARDWARE" | "ONEKEY" => Brand::OneKey,
            "QR HARDWARE" | "KEYSTONE" => Brand::Keystone,
            "BITBOX02 HARDWARE" | "BITBOX02" => Brand::BitBox02,
            "IMKEY HARDWARE" | "IMKEY" => Brand::Imkey,
            "AIRGAP" => Brand::AirGap,
            "COOLWALLET" => Brand::CoolWallet,
            "NGRAVEZERO" | "NGRAVE" => Brand::Ngrave,
            "GNOSIS" | "SAFE" => Brand::Safe,
            "COBOARGUS" => Brand::CoboArgus,
            "COBO" => Brand::Cobo,
            "FIREBLOCKS" => Brand::Fireblocks,
            "JADE" => Brand::Jade,
            "AMBER" => Brand::Amber,
            "MPCVAULT" => Brand::MpcVault,
            "METAMASK" => Brand::MetaMask,
            "TRUSTWALLET" | "TRUST" => Brand::TrustWallet,
            "IMTOKEN" => Brand::ImToken,
            "TP" | "TOKENPOCKET" => Brand::TokenPocket,
            "MATHWALLET" => Brand::MathWallet,
            "RAINBOW" => Brand::Rainbow,
            "ZERION" => Brand::Zerion,
            "BITGET" | "BITKEEP" => Brand::Bitget,
            "UNISWAP" => Brand::Uniswap,
            "COINBASE" => Brand::Coinbase,
            "WATCH ADDRESS" => Brand::Watch,
            _ => Brand::Unknown,
        }
    }

    pub fn category(self) -> Option<BrandCategory> {
        match self {
            Brand::Ledger
            | Brand::Trezor
            | Brand::GridPlus
            | Brand::OneKey
            | Brand::Keystone
            | Brand::BitBox02
            | Brand::Imkey
            | Brand::AirGap
            | Brand::CoolWallet
            | Brand::Ngrave => Some(BrandCategory::Hardware),
            Brand::Safe
            | Brand::CoboArgus
            | Brand::Cobo
            | Brand::Fireblocks
            | Brand::Jade
            | Brand::Amber
            | Brand::MpcVault => Some(BrandCategory::Institutional),
            Brand::MetaMask
            | Brand::TrustWallet
            | Brand::ImToken
            | Brand::TokenPocket
            | Brand::MathWallet
            | Brand::Rainbow
            | Brand::Zerion
            | Brand::Bitget
            | Brand::Uniswap
            | Brand::Coinbase => Some(BrandCategory::Mobile),
            Brand::SeedPhrase | Brand::PrivateKey | Brand::Watch | Brand::Unknown => None,
        }
    }

    /// Display rank, lower sorts first.
    pub fn rank(self) -> u64 {
        match self {
            Brand::SeedPhrase => 1,
            Brand::PrivateKey => 2,
            Brand::Ledger => 3,
            Brand::Trezor => 4,
            Brand::GridPlus => 5,
            Brand::OneKey => 6,
            Brand::Keystone => 7,
            Brand::BitBox02 => 8,
            Brand::Watch | Brand::Unknown => DEFAULT_RANK,
            other => other.catalog_rank().unwrap_or(DEFAULT_RANK),
        }
    }

    // Category base plus position in the hardware, institutional, mobile sequence
    fn catalog_rank(self) -> Option<u64> {
        let category = self.category()?;
        let position = HARDWARE_PRECEDENCE
            .iter()
            .chain(INSTITUTIONAL_PRECEDENCE)
            .chain(MOBILE_PRECEDENCE)
            .position(|b| *b == self)?;
        Some(category.base() + position as u64)
    }

    pub fn display_name(self) -> Option<&'static str> {
        let name = match self {
            Brand::SeedPhrase => "Seed Phrase",
            Brand::PrivateKey => "Private Key",
            Brand::Ledger => "Ledger",
            Brand::Trezor => "Trezor",
            Brand::GridPlus => "GridPlus",
            Brand::OneKey => "OneKey",
            Brand::Keystone => "Keystone",
            Brand::BitBox02 => "BitBox02",
            Brand::Imkey => "imKey",
            Brand::AirGap => "AirGap Vault",
            Brand::CoolWallet => "CoolWallet",
            Brand::Ngrave => "NGRAVE ZERO",
            Brand::Safe => "Safe",
            Brand::CoboArgus => "Cobo Argus",
            Brand::Cobo => "Cobo Wallet",
            Brand::Fireblocks => "Fireblocks",
            Brand::Jade => "Jade Wallet",
            Brand::Amber => "Amber",
            Brand::MpcVault => "MPCVault",
            Brand::MetaMask => "MetaMask",
            Brand::TrustWallet => "Trust Wallet",
            Brand::ImToken => "imToken",
            Brand::TokenPocket => "TokenPocket",
            Brand::MathWallet => "Math Wallet",
            Brand::Rainbow => "Rainbow",
            Brand::Zerion => "Zerion",
            Brand::Bitget => "Bitget Wallet",
            Brand::Uniswap => "Uniswap",
            Brand::Coinbase => "Coinbase Wallet",
            Brand::Watch => "Watch Address",
            Brand::Unknown => return None,
        };
        Some(name)
    }
}

/// Group title for a brand or keyring label; unknown labels are shown as-is
pub fn wallet_type_name(label: &str) -> String {
    Brand::from_label(label)
        .display_name()
        .unwrap_or(label)
        .to_string()
}
