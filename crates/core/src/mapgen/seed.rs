//! Seed mixing that splits one run seed into independent generation streams.

const TERRAIN_STREAM: u64 = 0x7E11_A5E5;
const NOISE_STREAM: u64 = 0x0A7E_5EED;

fn mix_seed_stream(seed: u64, stream: u64) -> u64 {
    let mut mixed = seed ^ stream.wrapping_mul(0xD6E8_FD9A_5B89_7A4D);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
    mixed ^ (mixed >> 33)
}

/// Seed for the stream consumed by the adjacency sweep, decorations, and stencils.
pub fn terrain_seed(run_seed: u64) -> u64 {
    mix_seed_stream(run_seed, TERRAIN_STREAM)
}

/// Seed for the water noise field. Never shares state with [`terrain_seed`].
pub fn noise_seed(run_seed: u64) -> u32 {
    let mixed = mix_seed_stream(run_seed, NOISE_STREAM);
    (mixed ^ (mixed >> 32)) as u32
}
