// p2p-keygen, a secp256k1 identity generator for libp2p nodes.
// Copyright (C) 2024 Subsquid Labs GmbH

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

pub use libp2p::{identity::Keypair, PeerId};
use rand::{rngs::OsRng, RngCore};

mod cli;
mod error;
pub mod identity;
pub mod output;

pub use cli::Cli;
pub use error::Error;

/// Generates a fresh secp256k1 identity and writes it to the paths given in `cli`.
///
/// Stages run strictly in order and the first failure is returned. A failure
/// after the private key was written leaves that file in place.
pub fn run(cli: &Cli) -> Result<PeerId, Error> {
    run_with(cli, &mut OsRng)
}

/// Same as [`run`], drawing the private key from `rng`.
pub fn run_with(cli: &Cli, rng: &mut impl RngCore) -> Result<PeerId, Error> {
    let keypair = identity::generate_keypair(rng)?;
    let raw = identity::raw_private_key(&keypair)?;

    let priv_key_path = cli.priv_key_path();
    log::debug!("Writing private key to {}", priv_key_path.display());
    output::write_secret(priv_key_path, hex::encode(raw)).map_err(|source| {
        Error::PrivateKeyWrite {
            path: priv_key_path.to_owned(),
            source,
        }
    })?;

    let peer_id = identity::peer_id_from_raw(&raw)?;
    log::debug!("Local peer ID: {peer_id}");

    let peer_id_path = cli.peer_id_path();
    log::debug!("Writing peer ID to {}", peer_id_path.display());
    output::write_secret(peer_id_path, peer_id.to_base58()).map_err(|source| {
        Error::IdentifierWrite {
            path: peer_id_path.to_owned(),
            source,
        }
    })?;

    Ok(peer_id)
}
