use quickcheck as qc;
use rand::Rng;

/// Payload for tests: a `rank` drawn from a few values, so that ties are common, and a `serial`
/// telling apart tokens of equal rank.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token {
    pub rank: u8,
    pub serial: u32,
}

impl qc::Arbitrary for Token {
    fn arbitrary<G: qc::Gen>(g: &mut G) -> Self {
        Token { rank: g.gen_range(0u8, 4), serial: g.gen() }
    }
}
