//! secp256k1 key generation and peer ID derivation.

use libp2p::identity::{secp256k1, Keypair};
use rand::RngCore;

use crate::{Error, PeerId};

/// Length of a raw secp256k1 secret key.
pub const SECRET_KEY_LEN: usize = 32;

/// Draws a fresh secp256k1 keypair from `rng`.
///
/// Unlike [`secp256k1::Keypair::generate`] this never panics: a failing random
/// source or a scalar outside the curve order is reported as an error.
pub fn generate_keypair(rng: &mut impl RngCore) -> Result<Keypair, Error> {
    let mut bytes = [0u8; SECRET_KEY_LEN];
    rng.try_fill_bytes(&mut bytes)?;
    let secret = secp256k1::SecretKey::try_from_bytes(&mut bytes)
        .map_err(|e| Error::KeyGeneration(e.to_string()))?;
    Ok(secp256k1::Keypair::from(secret).into())
}

pub fn raw_private_key(keypair: &Keypair) -> Result<[u8; SECRET_KEY_LEN], Error> {
    let keypair = keypair.clone().try_into_secp256k1()?;
    Ok(keypair.secret().to_bytes())
}

/// Derives the peer ID of the secp256k1 key with the given raw secret bytes.
pub fn peer_id_from_raw(raw: &[u8]) -> Result<PeerId, Error> {
    let mut raw = raw.to_vec();
    let secret = secp256k1::SecretKey::try_from_bytes(&mut raw)?;
    let keypair: Keypair = secp256k1::Keypair::from(secret).into();
    Ok(keypair.public().to_peer_id())
}

/// Reads back a hex encoded private key, as stored in the private key file.
pub fn keypair_from_hex(hex_key: &str) -> Result<Keypair, Error> {
    let mut raw = hex::decode(hex_key.trim())?;
    let secret = secp256k1::SecretKey::try_from_bytes(&mut raw).map_err(Error::InvalidKey)?;
    Ok(secp256k1::Keypair::from(secret).into())
}
