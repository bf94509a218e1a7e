//! Folds, partitions and traversals over [`GeneratorFunction`].
//!
//! Folds drive exactly one iteration. Partitions stay lazy: each side is a
//! filtered view that replays the source on its own.

use std::rc::Rc;

use super::function::GeneratorFunction;
use crate::control::{Either, Separated};
use crate::typeclass::Monoid;

impl<T: 'static> GeneratorFunction<T> {
    /// Folds from the left.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::generator::GeneratorFunction;
    ///
    /// let sequence = GeneratorFunction::from_vec(vec![1, 2, 3]);
    /// assert_eq!(sequence.reduce(10, |total, n| total + n), 16);
    /// ```
    pub fn reduce<B, F>(&self, initial: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.iterate().fold(initial, function)
    }

    /// Folds from the left with each element's position.
    pub fn reduce_with_index<B, F>(&self, initial: B, mut function: F) -> B
    where
        F: FnMut(usize, B, T) -> B,
    {
        self.iterate()
            .enumerate()
            .fold(initial, |accumulator, (index, element)| {
                function(index, accumulator, element)
            })
    }

    /// Folds from the right.
    ///
    /// The iteration is collected first, so this needs a finite sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::generator::GeneratorFunction;
    ///
    /// let letters = GeneratorFunction::from_vec(vec!['a', 'b', 'c']);
    /// let reversed = letters.reduce_right(String::new(), |c, mut text| {
    ///     text.push(c);
    ///     text
    /// });
    /// assert_eq!(reversed, "cba");
    /// ```
    pub fn reduce_right<B, F>(&self, initial: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.reduce_right_with_index(initial, |_, element, accumulator| {
            function(element, accumulator)
        })
    }

    /// Folds from the right with each element's position.
    pub fn reduce_right_with_index<B, F>(&self, initial: B, mut function: F) -> B
    where
        F: FnMut(usize, T, B) -> B,
    {
        let elements = self.to_vec();
        elements
            .into_iter()
            .enumerate()
            .rev()
            .fold(initial, |accumulator, (index, element)| {
                function(index, element, accumulator)
            })
    }

    /// Maps every element into a monoid and combines the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::generator::GeneratorFunction;
    /// use seglist::typeclass::Sum;
    ///
    /// let total = GeneratorFunction::from_vec(vec![1, 2, 3]).fold_map(Sum::new);
    /// assert_eq!(total.into_inner(), 6);
    /// ```
    pub fn fold_map<M, F>(&self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(T) -> M,
    {
        self.fold_map_with_index(|_, element| function(element))
    }

    /// Maps every element and position into a monoid and combines the results.
    pub fn fold_map_with_index<M, F>(&self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(usize, T) -> M,
    {
        M::combine_all(
            self.iterate()
                .enumerate()
                .map(|(index, element)| function(index, element)),
        )
    }

    /// Splits into the elements failing `predicate` (left) and those
    /// satisfying it (right).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::generator::GeneratorFunction;
    ///
    /// let split = GeneratorFunction::from_vec(vec![1, 2, 3, 4]).partition(|n| n % 2 == 0);
    /// assert_eq!(split.left.to_vec(), vec![1, 3]);
    /// assert_eq!(split.right.to_vec(), vec![2, 4]);
    /// ```
    pub fn partition<P>(&self, predicate: P) -> Separated<Self, Self>
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.partition_with_index(move |_, element| predicate(element))
    }

    /// Like [`partition`](Self::partition), with each element's position.
    pub fn partition_with_index<P>(&self, predicate: P) -> Separated<Self, Self>
    where
        P: Fn(usize, &T) -> bool + 'static,
    {
        let predicate = Rc::new(predicate);
        let accepts = Rc::clone(&predicate);
        Separated::new(
            self.filter_with_index(move |index, element| !predicate(index, element)),
            self.filter_with_index(move |index, element| accepts(index, element)),
        )
    }

    /// Routes every element through `function`, splitting by the side it
    /// lands on.
    pub fn partition_map<L, R, F>(
        &self,
        function: F,
    ) -> Separated<GeneratorFunction<L>, GeneratorFunction<R>>
    where
        L: 'static,
        R: 'static,
        F: Fn(T) -> Either<L, R> + 'static,
    {
        self.partition_map_with_index(move |_, element| function(element))
    }

    /// Like [`partition_map`](Self::partition_map), with each element's position.
    pub fn partition_map_with_index<L, R, F>(
        &self,
        function: F,
    ) -> Separated<GeneratorFunction<L>, GeneratorFunction<R>>
    where
        L: 'static,
        R: 'static,
        F: Fn(usize, T) -> Either<L, R> + 'static,
    {
        self.map_with_index(function).separate()
    }

    /// Applies a fallible `function` to every element.
    ///
    /// Drives one iteration and stops at the first `None`. On success the
    /// results are held in memory and replayed.
    pub fn traverse_option<B, F>(&self, mut function: F) -> Option<GeneratorFunction<B>>
    where
        B: Clone + 'static,
        F: FnMut(T) -> Option<B>,
    {
        self.traverse_with_index_option(|_, element| function(element))
    }

    /// Like [`traverse_option`](Self::traverse_option), with each element's
    /// position.
    pub fn traverse_with_index_option<B, F>(
        &self,
        mut function: F,
    ) -> Option<GeneratorFunction<B>>
    where
        B: Clone + 'static,
        F: FnMut(usize, T) -> Option<B>,
    {
        self.iterate()
            .enumerate()
            .map(|(index, element)| function(index, element))
            .collect::<Option<Vec<B>>>()
            .map(GeneratorFunction::from_vec)
    }

    /// Applies a fallible `function` to every element.
    ///
    /// Drives one iteration and stops at the first `Err`, which is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::generator::GeneratorFunction;
    ///
    /// let parsed = GeneratorFunction::from_vec(vec!["1", "x", "3"])
    ///     .traverse_result(|text| text.parse::<i32>());
    /// assert!(parsed.is_err());
    /// ```
    pub fn traverse_result<B, E, F>(&self, mut function: F) -> Result<GeneratorFunction<B>, E>
    where
        B: Clone + 'static,
        F: FnMut(T) -> Result<B, E>,
    {
        self.traverse_with_index_result(|_, element| function(element))
    }

    /// Like [`traverse_result`](Self::traverse_result), with each element's
    /// position.
    pub fn traverse_with_index_result<B, E, F>(
        &self,
        mut function: F,
    ) -> Result<GeneratorFunction<B>, E>
    where
        B: Clone + 'static,
        F: FnMut(usize, T) -> Result<B, E>,
    {
        self.iterate()
            .enumerate()
            .map(|(index, element)| function(index, element))
            .collect::<Result<Vec<B>, E>>()
            .map(GeneratorFunction::from_vec)
    }

    // =========================================================================
    // Witherable
    // =========================================================================

    /// Traverses with a fallible filter: `Some(None)` drops the element,
    /// `None` aborts the whole traversal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::generator::GeneratorFunction;
    ///
    /// let numbers = GeneratorFunction::from_vec(vec![1, 2, 3, 4]);
    /// let evens = numbers.wither_option(|n| Some((n % 2 == 0).then_some(n * 10)));
    /// assert_eq!(evens.map(|evens| evens.to_vec()), Some(vec![20, 40]));
    /// assert!(numbers.wither_option(|n| (n < 3).then_some(Some(n))).is_none());
    /// ```
    pub fn wither_option<B, F>(&self, function: F) -> Option<GeneratorFunction<B>>
    where
        B: Clone + 'static,
        F: FnMut(T) -> Option<Option<B>>,
    {
        self.traverse_option(function)
            .map(|traversed| traversed.compact())
    }

    /// Traverses with a fallible filter, stopping at the first `Err`.
    pub fn wither_result<B, E, F>(&self, function: F) -> Result<GeneratorFunction<B>, E>
    where
        B: Clone + 'static,
        F: FnMut(T) -> Result<Option<B>, E>,
    {
        self.traverse_result(function)
            .map(|traversed| traversed.compact())
    }

    /// Traverses with a fallible router, then splits `Left` from `Right`.
    ///
    /// `None` from `function` aborts the whole traversal.
    pub fn wilt_option<L, R, F>(
        &self,
        function: F,
    ) -> Option<Separated<GeneratorFunction<L>, GeneratorFunction<R>>>
    where
        L: Clone + 'static,
        R: Clone + 'static,
        F: FnMut(T) -> Option<Either<L, R>>,
    {
        self.traverse_option(function)
            .map(|traversed| traversed.separate())
    }

    /// Traverses with a fallible router, then splits `Left` from `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seglist::control::Either;
    /// use seglist::generator::GeneratorFunction;
    ///
    /// let tokens = GeneratorFunction::from_vec(vec!["1", "+", "2"]);
    /// let split = tokens.wilt_result(|token| match token {
    ///     "+" => Ok(Either::Left('+')),
    ///     digits => digits.parse::<i32>().map(Either::Right),
    /// });
    /// let split = split.unwrap();
    /// assert_eq!(split.left.to_vec(), vec!['+']);
    /// assert_eq!(split.right.to_vec(), vec![1, 2]);
    /// ```
    pub fn wilt_result<L, R, E, F>(
        &self,
        function: F,
    ) -> Result<Separated<GeneratorFunction<L>, GeneratorFunction<R>>, E>
    where
        L: Clone + 'static,
        R: Clone + 'static,
        F: FnMut(T) -> Result<Either<L, R>, E>,
    {
        self.traverse_result(function)
            .map(|traversed| traversed.separate())
    }
}

impl<L: 'static, R: 'static> GeneratorFunction<Either<L, R>> {
    /// Splits into the `Left` contents and the `Right` contents.
    pub fn separate(&self) -> Separated<GeneratorFunction<L>, GeneratorFunction<R>> {
        Separated::new(
            self.filter_map(Either::left),
            self.filter_map(Either::right),
        )
    }
}

impl<T: Clone + 'static> GeneratorFunction<Option<T>> {
    /// Turns a sequence of options into an optional sequence.
    pub fn sequence_option(&self) -> Option<GeneratorFunction<T>> {
        self.traverse_option(|element| element)
    }
}

impl<T: Clone + 'static, E: 'static> GeneratorFunction<Result<T, E>> {
    /// Turns a sequence of results into a sequence or the first error.
    pub fn sequence_result(&self) -> Result<GeneratorFunction<T>, E> {
        self.traverse_result(|element| element)
    }
}
