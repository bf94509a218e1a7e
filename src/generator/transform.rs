//! Element-wise combinators for [`GeneratorFunction`].
//!
//! Every combinator here is lazy: it captures its sources and returns a new
//! sequence whose producer replays them. Element order is preserved unless
//! the combinator's purpose is to change it (`sort_by`).

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::rc::Rc;

use super::function::GeneratorFunction;
use super::{Iteration, boxed};

/// The result of [`GeneratorFunction::span_left`].
#[derive(Debug, Clone)]
pub struct Spanned<T> {
    /// The longest prefix satisfying the predicate.
    pub init: GeneratorFunction<T>,
    /// Everything after that prefix.
    pub rest: GeneratorFunction<T>,
}

impl<T: 'static> GeneratorFunction<T> {
    /// Applies `function` to every element.
    pub fn map<B, F>(&self, function: F) -> GeneratorFunction<B>
    where
        B: 'static,
        F: Fn(T) -> B + 'static,
    {
        let source = self.clone();
        let function = Rc::new(function);
        GeneratorFunction::from_fn(move || {
            let function = Rc::clone(&function);
            boxed(source.iterate().map(move |element| function(element)))
        })
    }

    /// Applies `function` to every element and its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::generator::GeneratorFunction;
    ///
    /// let labelled = GeneratorFunction::from_vec(vec!['a', 'b'])
    ///     .map_with_index(|index, c| format!("{index}{c}"));
    /// assert_eq!(labelled.to_vec(), vec!["0a", "1b"]);
    /// ```
    pub fn map_with_index<B, F>(&self, function: F) -> GeneratorFunction<B>
    where
        B: 'static,
        F: Fn(usize, T) -> B + 'static,
    {
        let source = self.clone();
        let function = Rc::new(function);
        GeneratorFunction::from_fn(move || {
            let function = Rc::clone(&function);
            boxed(
                source
                    .iterate()
                    .enumerate()
                    .map(move |(index, element)| function(index, element)),
            )
        })
    }

    /// Keeps the elements satisfying `predicate`.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.filter_with_index(move |_, element| predicate(element))
    }

    /// Keeps the elements whose position and value satisfy `predicate`.
    pub fn filter_with_index<P>(&self, predicate: P) -> Self
    where
        P: Fn(usize, &T) -> bool + 'static,
    {
        let source = self.clone();
        let predicate = Rc::new(predicate);
        Self::from_fn(move || {
            let predicate = Rc::clone(&predicate);
            boxed(
                source
                    .iterate()
                    .enumerate()
                    .filter(move |(index, element)| predicate(*index, element))
                    .map(|(_, element)| element),
            )
        })
    }

    /// Maps and keeps the `Some` results.
    pub fn filter_map<B, F>(&self, function: F) -> GeneratorFunction<B>
    where
        B: 'static,
        F: Fn(T) -> Option<B> + 'static,
    {
        self.filter_map_with_index(move |_, element| function(element))
    }

    /// Maps with position and keeps the `Some` results.
    pub fn filter_map_with_index<B, F>(&self, function: F) -> GeneratorFunction<B>
    where
        B: 'static,
        F: Fn(usize, T) -> Option<B> + 'static,
    {
        let source = self.clone();
        let function = Rc::new(function);
        GeneratorFunction::from_fn(move || {
            let function = Rc::clone(&function);
            boxed(
                source
                    .iterate()
                    .enumerate()
                    .filter_map(move |(index, element)| function(index, element)),
            )
        })
    }

    /// Replaces every element with the sequence `function` returns for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::generator::GeneratorFunction;
    ///
    /// let repeated = GeneratorFunction::from_vec(vec![1, 2])
    ///     .chain(|n| GeneratorFunction::replicate(n, n));
    /// assert_eq!(repeated.to_vec(), vec![1, 2, 2]);
    /// ```
    pub fn chain<B, F>(&self, function: F) -> GeneratorFunction<B>
    where
        B: 'static,
        F: Fn(T) -> GeneratorFunction<B> + 'static,
    {
        self.chain_with_index(move |_, element| function(element))
    }

    /// Like [`chain`](Self::chain), with the element's position.
    pub fn chain_with_index<B, F>(&self, function: F) -> GeneratorFunction<B>
    where
        B: 'static,
        F: Fn(usize, T) -> GeneratorFunction<B> + 'static,
    {
        let source = self.clone();
        let function = Rc::new(function);
        GeneratorFunction::from_fn(move || {
            let function = Rc::clone(&function);
            boxed(
                source
                    .iterate()
                    .enumerate()
                    .flat_map(move |(index, element)| function(index, element).iterate()),
            )
        })
    }

    /// Yields each element once for every element of the sequence
    /// `function` returns for it.
    pub fn chain_first<B, F>(&self, function: F) -> Self
    where
        T: Clone,
        B: 'static,
        F: Fn(&T) -> GeneratorFunction<B> + 'static,
    {
        self.chain(move |element| {
            let kept = element.clone();
            function(&element).map(move |_| kept.clone())
        })
    }

    /// Pairs every element with every element of `other`, keeping the left.
    pub fn ap_first<B>(&self, other: &GeneratorFunction<B>) -> Self
    where
        T: Clone,
        B: 'static,
    {
        let other = other.clone();
        self.chain(move |element| other.map(move |_| element.clone()))
    }

    /// Pairs every element with every element of `other`, keeping the right.
    pub fn ap_second<B>(&self, other: &GeneratorFunction<B>) -> GeneratorFunction<B>
    where
        B: 'static,
    {
        let other = other.clone();
        self.chain(move |_| other.clone())
    }

    /// Combines elements pairwise, stopping at the shorter sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::generator::GeneratorFunction;
    ///
    /// let sums = GeneratorFunction::from_vec(vec![1, 2, 3])
    ///     .zip_with(&GeneratorFunction::from_vec(vec![10, 20]), |a, b| a + b);
    /// assert_eq!(sums.to_vec(), vec![11, 22]);
    /// ```
    pub fn zip_with<B, C, F>(&self, other: &GeneratorFunction<B>, function: F) -> GeneratorFunction<C>
    where
        B: 'static,
        C: 'static,
        F: Fn(T, B) -> C + 'static,
    {
        let left = self.clone();
        let right = other.clone();
        let function = Rc::new(function);
        GeneratorFunction::from_fn(move || {
            let function = Rc::clone(&function);
            boxed(
                left.iterate()
                    .zip(right.iterate())
                    .map(move |(a, b)| function(a, b)),
            )
        })
    }

    /// Pairs elements, stopping at the shorter sequence.
    pub fn zip<B>(&self, other: &GeneratorFunction<B>) -> GeneratorFunction<(T, B)>
    where
        B: 'static,
    {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Yields `self`, then the elements of `other` not present in `self`.
    ///
    /// Presence is decided by `equals` and re-checked against a fresh
    /// replay of `self` for every candidate.
    pub fn union_by<E>(&self, other: &Self, equals: E) -> Self
    where
        E: Fn(&T, &T) -> bool + 'static,
    {
        let left = self.clone();
        let missing = other.filter(move |element| !left.elem_by(element, &equals));
        self.concat(&missing)
    }

    /// Keeps the elements of `self` present in `other`.
    pub fn intersection_by<E>(&self, other: &Self, equals: E) -> Self
    where
        E: Fn(&T, &T) -> bool + 'static,
    {
        let other = other.clone();
        self.filter(move |element| other.elem_by(element, &equals))
    }

    /// Keeps the elements of `self` absent from `other`.
    pub fn difference_by<E>(&self, other: &Self, equals: E) -> Self
    where
        E: Fn(&T, &T) -> bool + 'static,
    {
        let other = other.clone();
        self.filter(move |element| !other.elem_by(element, &equals))
    }

    /// [`union_by`](Self::union_by) with `PartialEq`.
    pub fn union(&self, other: &Self) -> Self
    where
        T: PartialEq,
    {
        self.union_by(other, T::eq)
    }

    /// [`intersection_by`](Self::intersection_by) with `PartialEq`.
    pub fn intersection(&self, other: &Self) -> Self
    where
        T: PartialEq,
    {
        self.intersection_by(other, T::eq)
    }

    /// [`difference_by`](Self::difference_by) with `PartialEq`.
    pub fn difference(&self, other: &Self) -> Self
    where
        T: PartialEq,
    {
        self.difference_by(other, T::eq)
    }

    /// Keeps at most the first `count` elements.
    pub fn take_left(&self, count: usize) -> Self {
        let source = self.clone();
        Self::from_fn(move || boxed(source.iterate().take(count)))
    }

    /// Keeps at most the last `count` elements.
    ///
    /// Each iteration drains the source before yielding.
    pub fn take_right(&self, count: usize) -> Self {
        let source = self.clone();
        Self::from_fn(move || {
            if count == 0 {
                return boxed(std::iter::empty());
            }
            let mut window = VecDeque::with_capacity(count);
            for element in source.iterate() {
                if window.len() == count {
                    window.pop_front();
                }
                window.push_back(element);
            }
            boxed(window.into_iter())
        })
    }

    /// Keeps the longest prefix satisfying `predicate`.
    pub fn take_left_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        let source = self.clone();
        let predicate = Rc::new(predicate);
        Self::from_fn(move || {
            let predicate = Rc::clone(&predicate);
            boxed(source.iterate().take_while(move |element| predicate(element)))
        })
    }

    /// Skips the first `count` elements.
    pub fn drop_left(&self, count: usize) -> Self {
        let source = self.clone();
        Self::from_fn(move || boxed(source.iterate().skip(count)))
    }

    /// Drops the last `count` elements.
    ///
    /// Elements are released `count` positions behind the source, so this
    /// stays lazy.
    pub fn drop_right(&self, count: usize) -> Self {
        let source = self.clone();
        Self::from_fn(move || {
            let mut iteration = source.iterate();
            let mut delay: VecDeque<T> = iteration.by_ref().take(count).collect();
            boxed(std::iter::from_fn(move || {
                let element = iteration.next()?;
                delay.push_back(element);
                delay.pop_front()
            }))
        })
    }

    /// Skips the longest prefix satisfying `predicate`.
    pub fn drop_left_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        let source = self.clone();
        let predicate = Rc::new(predicate);
        Self::from_fn(move || {
            let predicate = Rc::clone(&predicate);
            boxed(source.iterate().skip_while(move |element| predicate(element)))
        })
    }

    /// Splits into the longest prefix satisfying `predicate` and the rest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::generator::GeneratorFunction;
    ///
    /// let spanned = GeneratorFunction::from_vec(vec![1, 3, 4, 5]).span_left(|n| n % 2 == 1);
    /// assert_eq!(spanned.init.to_vec(), vec![1, 3]);
    /// assert_eq!(spanned.rest.to_vec(), vec![4, 5]);
    /// ```
    pub fn span_left<P>(&self, predicate: P) -> Spanned<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        let predicate = Rc::new(predicate);
        let for_init = Rc::clone(&predicate);
        Spanned {
            init: self.take_left_while(move |element| for_init(element)),
            rest: self.drop_left_while(move |element| predicate(element)),
        }
    }

    /// Sorts stably under `compare`.
    ///
    /// The sequence cannot be indexed or mutated in place, so sorting is a
    /// selection sort over full replays: each pass yields every element
    /// equal to the current minimum, in source order, and tracks the
    /// smallest element greater than it as the next minimum. Sorting `n`
    /// elements with `k` distinct keys replays the source `k + 1` times.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::generator::GeneratorFunction;
    ///
    /// let pairs = GeneratorFunction::from_vec(vec![(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd')]);
    /// let sorted = pairs.sort_by(|left, right| left.0.cmp(&right.0));
    /// assert_eq!(sorted.to_vec(), vec![(1, 'b'), (2, 'd'), (3, 'a'), (3, 'c')]);
    /// ```
    pub fn sort_by<C>(&self, compare: C) -> Self
    where
        T: Clone,
        C: Fn(&T, &T) -> Ordering + 'static,
    {
        let source = self.clone();
        let compare: Rc<dyn Fn(&T, &T) -> Ordering> = Rc::new(compare);
        Self::from_fn(move || {
            boxed(SortIteration {
                source: source.clone(),
                compare: Rc::clone(&compare),
                current: None,
                candidate: None,
                pass: None,
                started: false,
            })
        })
    }

    /// Sorts stably by `Ord`.
    pub fn sort(&self) -> Self
    where
        T: Ord + Clone,
    {
        self.sort_by(T::cmp)
    }
}

impl<T: 'static> GeneratorFunction<Option<T>> {
    /// Keeps the contents of the `Some` elements.
    pub fn compact(&self) -> GeneratorFunction<T> {
        self.filter_map(|element| element)
    }
}

impl<A: 'static, B: 'static> GeneratorFunction<(A, B)> {
    /// Splits a sequence of pairs into two sequences.
    ///
    /// Each side replays the source independently.
    pub fn unzip(&self) -> (GeneratorFunction<A>, GeneratorFunction<B>) {
        (self.map(|(a, _)| a), self.map(|(_, b)| b))
    }
}

impl<F: 'static> GeneratorFunction<F> {
    /// Applies every function to every element of `values`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::generator::GeneratorFunction;
    ///
    /// let functions: Vec<fn(i32) -> i32> = vec![|n| n + 1, |n| n * 10];
    /// let applied = GeneratorFunction::from_vec(functions).ap(&GeneratorFunction::from_vec(vec![1, 2]));
    /// assert_eq!(applied.to_vec(), vec![2, 3, 10, 20]);
    /// ```
    pub fn ap<A, B>(&self, values: &GeneratorFunction<A>) -> GeneratorFunction<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B,
    {
        let functions = self.clone();
        let values = values.clone();
        GeneratorFunction::from_fn(move || {
            let values = values.clone();
            boxed(
                functions
                    .iterate()
                    .flat_map(move |function| values.iterate().map(move |value| function(value))),
            )
        })
    }
}

/// State of one pass-by-pass selection sort.
struct SortIteration<T> {
    source: GeneratorFunction<T>,
    compare: Rc<dyn Fn(&T, &T) -> Ordering>,
    current: Option<T>,
    candidate: Option<T>,
    pass: Option<Iteration<T>>,
    started: bool,
}

impl<T: Clone + 'static> Iterator for SortIteration<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if !self.started {
            self.started = true;
            self.current = self.source.min_by(|left, right| (self.compare)(left, right));
        }
        loop {
            let current = self.current.as_ref()?;
            let pass = self.pass.get_or_insert_with(|| self.source.iterate());
            if let Some(element) = pass.next() {
                match (self.compare)(&element, current) {
                    Ordering::Equal => return Some(element),
                    Ordering::Greater => {
                        let closer = self.candidate.as_ref().is_none_or(|candidate| {
                            (self.compare)(&element, candidate) == Ordering::Less
                        });
                        if closer {
                            self.candidate = Some(element);
                        }
                    }
                    Ordering::Less => {}
                }
            } else {
                // Nothing greater than `current` remains when `candidate` is empty.
                self.pass = None;
                self.current = self.candidate.take();
            }
        }
    }
}
