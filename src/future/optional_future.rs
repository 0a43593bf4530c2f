//! Asynchronous combinators for [`Optional`].

use std::future::{Future, IntoFuture};

use crate::control::{Optional, Outcome, capture_async};

impl<T> Optional<T> {
    // =========================================================================
    // Elimination
    // =========================================================================

    /// Like [`fold`](Optional::fold), awaiting whichever branch runs.
    pub async fn fold_async<U, F, G, FutF, FutG>(self, some_function: F, none_function: G) -> U
    where
        F: FnOnce(T) -> FutF,
        G: FnOnce() -> FutG,
        FutF: IntoFuture<Output = U>,
        FutG: IntoFuture<Output = U>,
    {
        match self {
            Self::Some(value) => some_function(value).await,
            Self::None => none_function().await,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Like [`map`](Optional::map), awaiting the mapped value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Optional;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let doubled = Optional::some(21).map_async(|value| async move { value * 2 }).await;
    /// assert_eq!(doubled, Optional::some(42));
    /// # });
    /// ```
    pub async fn map_async<U, F, Fut>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = U>,
    {
        match self {
            Self::Some(value) => Optional::Some(function(value).await),
            Self::None => Optional::None,
        }
    }

    /// Like [`bind`](Optional::bind), awaiting the bound optional.
    pub async fn bind_async<U, F, Fut>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = Optional<U>>,
    {
        match self {
            Self::Some(value) => function(value).await,
            Self::None => Optional::None,
        }
    }

    /// Like [`filter`](Optional::filter), awaiting the predicate.
    pub async fn filter_async<P, Fut>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> Fut,
        Fut: IntoFuture<Output = bool>,
    {
        if let Self::Some(value) = self {
            if predicate(&value).await {
                return Self::Some(value);
            }
        }
        Self::None
    }

    /// Like [`or_else`](Optional::or_else); the factory's future is only
    /// created and awaited on `None`.
    pub async fn or_else_async<F, Fut>(self, factory: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: IntoFuture<Output = Self>,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => factory().await,
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Like [`on_some`](Optional::on_some), awaiting the action.
    pub async fn on_some_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: IntoFuture<Output = ()>,
    {
        if let Self::Some(value) = &self {
            action(value).await;
        }
        self
    }

    /// Like [`on_none`](Optional::on_none), awaiting the action.
    pub async fn on_none_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: IntoFuture<Output = ()>,
    {
        if self.is_none() {
            action().await;
        }
        self
    }

    // =========================================================================
    // Fault Capture
    // =========================================================================

    /// Awaits the future built by `factory`; a panic while building or
    /// polling it yields `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Optional;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let parsed = Optional::try_catch_async(|| async { "7".parse::<i32>().unwrap() }).await;
    /// assert_eq!(parsed, Optional::some(7));
    ///
    /// let failed = Optional::try_catch_async(|| async { "x".parse::<i32>().unwrap() }).await;
    /// assert!(failed.is_none());
    /// # });
    /// ```
    pub async fn try_catch_async<F, Fut>(factory: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: IntoFuture<Output = T>,
    {
        capture_async("Optional::try_catch_async", factory)
            .await
            .ok()
            .into()
    }
}

/// `*_async` combinators on any future that resolves to an [`Optional`].
///
/// Each method awaits the receiver, then delegates to the inherent method of
/// the same name.
///
/// # Examples
///
/// ```rust
/// use railway::control::Optional;
/// use railway::future::OptionalFutureExt;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let lookup = async { Optional::some("forty-two") };
/// let length = lookup
///     .map_async(|name| async move { name.len() })
///     .filter_async(|length| std::future::ready(*length > 3))
///     .await;
/// assert_eq!(length, Optional::some(9));
/// # });
/// ```
pub trait OptionalFutureExt<T>: Future<Output = Optional<T>> + Sized {
    /// Awaits the receiver, then [`Optional::fold_async`].
    fn fold_async<U, F, G, FutF, FutG>(
        self,
        some_function: F,
        none_function: G,
    ) -> impl Future<Output = U>
    where
        F: FnOnce(T) -> FutF,
        G: FnOnce() -> FutG,
        FutF: IntoFuture<Output = U>,
        FutG: IntoFuture<Output = U>,
    {
        async move { self.await.fold_async(some_function, none_function).await }
    }

    /// Awaits the receiver, then [`Optional::map_async`].
    fn map_async<U, F, Fut>(self, function: F) -> impl Future<Output = Optional<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = U>,
    {
        async move { self.await.map_async(function).await }
    }

    /// Awaits the receiver, then [`Optional::bind_async`].
    fn bind_async<U, F, Fut>(self, function: F) -> impl Future<Output = Optional<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = Optional<U>>,
    {
        async move { self.await.bind_async(function).await }
    }

    /// Awaits the receiver, then [`Optional::filter_async`].
    fn filter_async<P, Fut>(self, predicate: P) -> impl Future<Output = Optional<T>>
    where
        P: FnOnce(&T) -> Fut,
        Fut: IntoFuture<Output = bool>,
    {
        async move { self.await.filter_async(predicate).await }
    }

    /// Awaits the receiver, then [`Optional::or_else_async`].
    fn or_else_async<F, Fut>(self, factory: F) -> impl Future<Output = Optional<T>>
    where
        F: FnOnce() -> Fut,
        Fut: IntoFuture<Output = Optional<T>>,
    {
        async move { self.await.or_else_async(factory).await }
    }

    /// Awaits the receiver, then [`Optional::on_some_async`].
    fn on_some_async<F, Fut>(self, action: F) -> impl Future<Output = Optional<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: IntoFuture<Output = ()>,
    {
        async move { self.await.on_some_async(action).await }
    }

    /// Awaits the receiver, then [`Optional::on_none_async`].
    fn on_none_async<F, Fut>(self, action: F) -> impl Future<Output = Optional<T>>
    where
        F: FnOnce() -> Fut,
        Fut: IntoFuture<Output = ()>,
    {
        async move { self.await.on_none_async(action).await }
    }

    /// Awaits the receiver, then applies the synchronous
    /// [`Optional::to_outcome`].
    fn to_outcome_async<E>(self, error: E) -> impl Future<Output = Outcome<E, T>> {
        async move { self.await.to_outcome(error) }
    }
}

impl<T, F> OptionalFutureExt<T> for F where F: Future<Output = Optional<T>> {}
