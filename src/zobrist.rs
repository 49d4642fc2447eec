use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

// fixed stream seed; every run derives identical tables
const KEY_STREAM_SEED: u64 = 0x536F_6B6F_4261_6E21;

/// Per-cell 64-bit keys for box and pusher occupancy, XOR-folded into state
/// keys so a single move updates a key in constant time.
#[derive(Debug)]
pub(crate) struct KeyTable {
    box_keys: Vec<u64>,
    player_keys: Vec<u64>,
}

impl KeyTable {
    pub(crate) fn new(cells: usize) -> Self {
        let mut rng = ChaCha12Rng::seed_from_u64(KEY_STREAM_SEED);
        let mut box_keys = Vec::with_capacity(cells);
        let mut player_keys = Vec::with_capacity(cells);

        for _ in 0..cells {
            box_keys.push(rng.gen());
            player_keys.push(rng.gen());
        }

        Self { box_keys, player_keys }
    }

    pub(crate) fn box_key(&self, flat: usize) -> u64 {
        self.box_keys[flat]
    }

    pub(crate) fn player_key(&self, flat: usize) -> u64 {
        self.player_keys[flat]
    }
}
