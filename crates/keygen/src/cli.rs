use std::path::Path;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Generate a secp256k1 libp2p identity")]
pub struct Cli {
    #[arg(long = "privKeyPath", default_value = "", help = "Private Key File Path")]
    pub priv_key_path: String,

    #[arg(long = "peerIDPath", default_value = "", help = "Peer ID File Path")]
    pub peer_id_path: String,
}

impl Cli {
    pub fn priv_key_path(&self) -> &Path {
        Path::new(&self.priv_key_path)
    }

    pub fn peer_id_path(&self) -> &Path {
        Path::new(&self.peer_id_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paths() {
        let cli = Cli::parse_from([
            "p2p-tool",
            "--privKeyPath",
            "/tmp/priv.key",
            "--peerIDPath=/tmp/peer.id",
        ]);
        assert_eq!(cli.priv_key_path(), Path::new("/tmp/priv.key"));
        assert_eq!(cli.peer_id_path(), Path::new("/tmp/peer.id"));
    }

    #[test]
    fn test_missing_flags_default_to_empty() {
        let cli = Cli::parse_from(["p2p-tool"]);
        assert_eq!(cli.priv_key_path, "");
        assert_eq!(cli.peer_id_path, "");
    }
}
