//! Binary heap operations on slices
//!
//! Throughout, `f(x,y)` is whether `x` must be nearer to the root than `y`.

#[inline] fn parent(k: usize) -> usize { (k-1)/2 }
#[inline] fn left  (k: usize) -> usize { 2*k+1 }
#[inline] fn right (k: usize) -> usize { 2*k+2 }

/// Given a slice `xs` which is all but the last element already a heap, extend
/// the heap to include the last element.
/// `xs` being empty is an error.
#[inline] pub fn push<A, F: Fn(&A, &A) -> bool>(f: F, xs: &mut [A]) {
    assert!(xs.len() > 0);
    let mut n = xs.len() - 1;
    while n > 0 {
        let m = parent(n);
        if !f(&xs[n], &xs[m]) { return };
        xs.swap(m, n);
        n = m;
    }
}

/// Given a slice `xs` which is already a heap, move the last element into the root's place
/// and the root to the end of the slice, and retract the heap to exclude it.
/// `xs` being empty is an error.
#[inline] pub fn pop<A, F: Fn(&A, &A) -> bool>(f: F, xs: &mut [A]) {
    assert!(xs.len() > 0);
    let l = xs.len()-1;
    xs.swap(0, l);
    sift_down(f, &mut xs[0..l], 0);
}

/// Make `xs` a heap.
#[inline] pub fn build<A, F: Fn(&A, &A) -> bool>(f: F, xs: &mut [A]) {
    if xs.len() <= 1 { return };
    for k in (0..xs.len()>>1).rev() { sift_down(&f, xs, k) }
}

/// Which of `xs[m]` and its children belongs at `m`.
///
/// A child is chosen only if one outranks `xs[m]`; then, with both children present, the left
/// is chosen if it outranks the right and the right otherwise.
#[inline] fn first_of_three<A, F: Fn(&A, &A) -> bool>(f: &F, xs: &[A], m: usize) -> usize {
    let (l, r) = (left(m), right(m));
    if r < xs.len() {
        if f(&xs[l], &xs[m]) || f(&xs[r], &xs[m]) {
            if f(&xs[l], &xs[r]) { l } else { r }
        } else { m }
    } else if l < xs.len() && f(&xs[l], &xs[m]) { l } else { m }
}

/// Move `xs[m]` down to its proper place, assuming it need not move up.
#[inline] pub fn sift_down<A, F: Fn(&A, &A) -> bool>(f: F, xs: &mut [A], mut m: usize) {
    while m < xs.len() {
        let n = first_of_three(&f, xs, m);
        if m == n { return };
        xs.swap(m, n);
        m = n;
    }
}

#[inline] pub fn is_heap<A, F: Fn(&A, &A) -> bool>(f: F, xs: &[A]) -> bool {
    !(1..xs.len()).any(|n| f(&xs[n], &xs[parent(n)]))
}

#[cfg(test)] mod tests {
    use quickcheck::TestResult;

    use super::*;

    fn greater<A: Ord>(x: &A, y: &A) -> bool { x > y }

    fn is_descending(xs: &[usize]) -> bool {
        (1..xs.len()).all(|k| xs[k-1] >= xs[k])
    }

    #[quickcheck] fn build_test(mut xv: Vec<usize>) -> bool {
        build(greater, &mut xv[..]);
        is_heap(greater, &xv[..])
    }

    #[quickcheck] fn push_test(mut xv: Vec<usize>, x: usize) -> bool {
        build(greater, &mut xv[..]);
        xv.push(x);
        push(greater, &mut xv[..]);
        is_heap(greater, &xv[..])
    }

    #[quickcheck] fn pop_test(mut xv: Vec<usize>) -> TestResult {
        if xv.len() == 0 { return TestResult::discard() };
        let xs = &mut xv[..];
        let l = xs.len()-1;
        build(greater, &mut *xs);
        let max = xs[0];
        pop(greater, &mut *xs);
        TestResult::from_bool(is_heap(greater, &xs[0..l]) && xs[l] == max &&
                              xs[0..l].iter().all(|&x| x <= max))
    }

    #[quickcheck] fn pops_descend(mut xv: Vec<usize>) -> bool {
        let xs = &mut xv[..];
        build(greater, &mut *xs);
        for l in (1..xs.len()+1).rev() { pop(greater, &mut xs[0..l]) }
        xs.reverse();
        is_descending(xs)
    }

    #[test] fn first_of_three_takes_right_among_equal_children() {
        // Children tie, and both outrank the root.
        let xs = [(0, 'r'), (5, 'l'), (5, 'R')];
        let f = |a: &(u8, char), b: &(u8, char)| a.0 > b.0;
        assert_eq!(2, first_of_three(&f, &xs, 0));
        let xs = [(0, 'r'), (6, 'l'), (5, 'R')];
        assert_eq!(1, first_of_three(&f, &xs, 0));
    }

    #[test] fn first_of_three_with_only_left_child() {
        let f = greater::<u8>;
        assert_eq!(1, first_of_three(&f, &[1, 2], 0));
        assert_eq!(0, first_of_three(&f, &[2, 1], 0));
        assert_eq!(0, first_of_three(&f, &[2, 2], 0));
        assert_eq!(0, first_of_three(&f, &[2], 0));
    }

    #[test] #[should_panic] fn push_empty() { push(greater::<u8>, &mut []) }

    #[test] #[should_panic] fn pop_empty() { pop(greater::<u8>, &mut []) }
}
