//! SM3 compression function `CF(V, B)`.

use super::round::{ROUNDS, ff, gg, p0, round_constant};
use super::schedule::Schedule;
use super::word::rotate_left;
use super::{BLOCK_SIZE, STATE_WORDS};

/// Chaining state `V`, words `A..H`.
pub type State = [u32; STATE_WORDS];

/// Working registers after one round, in `A..H` order.
#[cfg(feature = "debug-tools")]
pub type RoundTrace = [State; ROUNDS];

#[derive(Clone, Copy)]
struct Registers {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
    e: u32,
    f: u32,
    g: u32,
    h: u32,
}

impl Registers {
    const fn load(v: &State) -> Self {
        Self {
            a: v[0],
            b: v[1],
            c: v[2],
            d: v[3],
            e: v[4],
            f: v[5],
            g: v[6],
            h: v[7],
        }
    }

    const fn words(&self) -> State {
        [
            self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h,
        ]
    }

    /// Run round `j`. All reads happen before any register is replaced.
    #[inline(always)]
    fn round(self, j: usize, schedule: &Schedule) -> Self {
        let Self {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
        } = self;

        let a12 = rotate_left(a, 12);
        let t = rotate_left(round_constant(j), (j % 32) as u32);
        let ss1 = rotate_left(a12.wrapping_add(e).wrapping_add(t), 7);
        let ss2 = ss1 ^ a12;
        let tt1 = ff(j, a, b, c)
            .wrapping_add(d)
            .wrapping_add(ss2)
            .wrapping_add(schedule.w_prime[j]);
        let tt2 = gg(j, e, f, g)
            .wrapping_add(h)
            .wrapping_add(ss1)
            .wrapping_add(schedule.w[j]);

        Self {
            a: tt1,
            b: a,
            c: rotate_left(b, 9),
            d: c,
            e: p0(tt2),
            f: e,
            g: rotate_left(f, 19),
            h: g,
        }
    }
}

fn feed_forward(v: &State, regs: &Registers) -> State {
    let mut next = regs.words();
    for (out, prev) in next.iter_mut().zip(v) {
        *out ^= prev;
    }
    next
}

/// Compress one block into the chaining state, returning the next state.
#[must_use]
pub fn compress(v: &State, block: &[u8; BLOCK_SIZE]) -> State {
    let schedule = Schedule::expand(block);
    let mut regs = Registers::load(v);
    for j in 0..ROUNDS {
        regs = regs.round(j, &schedule);
    }
    feed_forward(v, &regs)
}

/// Like [`compress`], also returning the registers after every round.
#[cfg(feature = "debug-tools")]
#[must_use]
pub fn compress_traced(v: &State, block: &[u8; BLOCK_SIZE]) -> (State, RoundTrace) {
    let schedule = Schedule::expand(block);
    let mut regs = Registers::load(v);
    let mut trace = [[0u32; STATE_WORDS]; ROUNDS];
    for (j, slot) in trace.iter_mut().enumerate() {
        regs = regs.round(j, &schedule);
        *slot = regs.words();
    }
    (feed_forward(v, &regs), trace)
}
