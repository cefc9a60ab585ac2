use num::Float;

/// ドット積
/// d(a, b) = Σ(a_i * b_i)
/// summed in index order so the result is bit-reproducible
#[inline]
pub fn dot<N>(a: &[N], b: &[N]) -> N
where
    N: Float,
{
    debug_assert_eq!(
        a.len(),
        b.len(),
        "Vectors must be of the same length to compute dot product."
    );
    a.iter()
        .zip(b.iter())
        .fold(N::zero(), |acc, (&x, &y)| acc + x * y)
}

/// ユークリッドノルム
/// ||a|| = sqrt(Σ(a_i^2))
#[inline]
pub fn l2_norm<N>(a: &[N]) -> N
where
    N: Float,
{
    a.iter().fold(N::zero(), |acc, &x| acc + x * x).sqrt()
}

/// Scale `a` to unit length in place
/// the zero vector is left untouched
#[inline]
pub fn l2_normalize<N>(a: &mut [N])
where
    N: Float,
{
    let norm = l2_norm(a);
    if norm > N::zero() {
        for x in a.iter_mut() {
            *x = *x / norm;
        }
    }
}
