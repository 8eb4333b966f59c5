//! Remainder computation by long division
//!
//! Division algorithm according to D. E. Knuth, "The Art of Computer
//! Programming", vol. 2, section 4.3.1, Algorithm D, restricted to what
//! the modular operations need: the remainder of a dividend of up to 16
//! limbs by a divisor of up to 8 limbs. The quotient is never stored.
//!
//! All scratch space lives in fixed-size arrays on the stack.

use std::cmp::Ordering;

use super::core::{LIMB_BITS, N_LIMBS};
use super::limbs::{LIMB_MASK, compare_limbs, shl_into, shr_into, significant_limbs};

/// Largest dividend accepted, in limbs (a full 512-bit product).
pub(crate) const MAX_DIVIDEND_LIMBS: usize = 2 * N_LIMBS;

/// The limb radix, 2³².
const BASE: u64 = 1 << LIMB_BITS;

/// Computes `dividend mod modulus`.
///
/// A zero modulus yields zero. The remainder is always strictly smaller
/// than the modulus and thus fits the modulus' significant limbs.
pub(crate) fn knuth_remainder(dividend: &[u32], modulus: &[u32; N_LIMBS]) -> [u32; N_LIMBS] {
    debug_assert!(dividend.len() <= MAX_DIVIDEND_LIMBS);

    let mut rem = [0u32; N_LIMBS];

    let u_len = significant_limbs(dividend);
    let v_len = significant_limbs(modulus);
    if v_len == 0 {
        return rem;
    }

    let u_in = &dividend[..u_len];
    let v_in = &modulus[..v_len];
    match compare_limbs(u_in, v_in) {
        Ordering::Less => {
            // u_len <= v_len <= N_LIMBS here.
            rem[..u_len].copy_from_slice(u_in);
            return rem;
        }
        Ordering::Equal => return rem,
        Ordering::Greater => {}
    }

    if v_len == 1 {
        rem[0] = rem_by_limb(u_in, modulus[0]);
        return rem;
    }

    // Normalize: shift so that the divisor's high limb has its MSB set.
    // The dividend receives one extra limb of headroom.
    let shift = modulus[v_len - 1].leading_zeros();
    let mut v = [0u32; N_LIMBS];
    shl_into(&mut v[..v_len], v_in, shift);
    let mut u = [0u32; MAX_DIVIDEND_LIMBS + 1];
    shl_into(&mut u[..u_len + 1], u_in, shift);

    let n = v_len;
    let v_high = v[n - 1] as u64;
    let v_next = v[n - 2] as u64;

    for j in (0..=u_len - n).rev() {
        // Estimate the quotient digit from the top two limbs of the window.
        let num = ((u[j + n] as u64) << LIMB_BITS) | u[j + n - 1] as u64;
        let mut qhat = num / v_high;
        let mut rhat = num % v_high;

        // At most two corrections. Once rhat no longer fits a limb the
        // product test can't fail anymore.
        while qhat >= BASE || qhat * v_next > ((rhat << LIMB_BITS) | u[j + n - 2] as u64) {
            qhat -= 1;
            rhat += v_high;
            if rhat >= BASE {
                break;
            }
        }

        if mul_sub_at(&mut u, j, &v[..n], qhat) < 0 {
            log::trace!("knuth: qhat overestimated at window {j}, adding divisor back");
            add_back_at(&mut u, j, &v[..n]);
        }
    }

    // Un-normalize. u[n] is zero at this point since the remainder < v.
    shr_into(&mut rem[..n], &u[..n + 1], shift);
    rem
}

/// Remainder of a multi-limb dividend by a single non-zero limb.
fn rem_by_limb(u: &[u32], d: u32) -> u32 {
    let d = d as u64;

    u.iter()
        .rev()
        .fold(0u64, |r, &limb| ((r << LIMB_BITS) | limb as u64) % d) as u32
}

/// Subtracts `qhat * v` from the window `u[j..=j + v.len()]`.
///
/// Returns the final signed difference of the window's top limb; a
/// negative value means the subtraction borrowed past the window.
fn mul_sub_at(u: &mut [u32], j: usize, v: &[u32], qhat: u64) -> i64 {
    debug_assert!(qhat < BASE);

    let n = v.len();
    let mut borrow = 0i64;

    for (i, &vi) in v.iter().enumerate() {
        let p = qhat * vi as u64;
        let t = u[i + j] as i64 - borrow - (p & LIMB_MASK) as i64;
        u[i + j] = t as u32;
        borrow = (p >> LIMB_BITS) as i64 - (t >> LIMB_BITS);
    }

    let t = u[j + n] as i64 - borrow;
    u[j + n] = t as u32;
    t
}

/// Adds `v` back onto the window `u[j..=j + v.len()]`.
///
/// The carry out of the top limb cancels the borrow left behind by
/// [`mul_sub_at`] and is dropped.
fn add_back_at(u: &mut [u32], j: usize, v: &[u32]) {
    let n = v.len();
    let mut carry = 0u64;

    for (i, &vi) in v.iter().enumerate() {
        let s = u[i + j] as u64 + vi as u64 + carry;
        u[i + j] = s as u32;
        carry = s >> LIMB_BITS;
    }

    u[j + n] = u[j + n].wrapping_add(carry as u32);
}
