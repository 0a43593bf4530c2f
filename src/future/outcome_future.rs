//! Asynchronous combinators for [`Outcome`].

use std::future::{Future, IntoFuture};

use crate::control::{Fault, Optional, Outcome, capture_async};

impl<E, T> Outcome<E, T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Awaits the future built by `factory`; a panic while building or
    /// polling it becomes `Failure(error_factory(fault))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::control::Outcome;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let outcome: Outcome<String, i32> = Outcome::try_catch_async(
    ///     || async { "reset".parse::<i32>().unwrap() },
    ///     |fault| fault.into_message(),
    /// )
    /// .await;
    /// assert!(outcome.error().contains("InvalidDigit"));
    /// # });
    /// ```
    pub async fn try_catch_async<F, Fut, G>(factory: F, error_factory: G) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: IntoFuture<Output = T>,
        G: FnOnce(Fault) -> E,
    {
        match capture_async("Outcome::try_catch_async", factory).await {
            Ok(value) => Self::Success(value),
            Err(fault) => Self::Failure(error_factory(fault)),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Like [`fold`](Outcome::fold), awaiting whichever branch runs.
    pub async fn fold_async<U, F, G, FutF, FutG>(self, success_function: F, failure_function: G) -> U
    where
        F: FnOnce(T) -> FutF,
        G: FnOnce(E) -> FutG,
        FutF: IntoFuture<Output = U>,
        FutG: IntoFuture<Output = U>,
    {
        match self {
            Self::Success(value) => success_function(value).await,
            Self::Failure(error) => failure_function(error).await,
        }
    }

    /// Like [`value_or_else`](Outcome::value_or_else), awaiting the fallback.
    pub async fn value_or_else_async<F, Fut>(self, function: F) -> T
    where
        F: FnOnce(E) -> Fut,
        Fut: IntoFuture<Output = T>,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => function(error).await,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Like [`map`](Outcome::map), awaiting the mapped value.
    pub async fn map_async<U, F, Fut>(self, function: F) -> Outcome<E, U>
    where
        F: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = U>,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value).await),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Like [`map_error`](Outcome::map_error), awaiting the mapped error.
    pub async fn map_error_async<E2, F, Fut>(self, function: F) -> Outcome<E2, T>
    where
        F: FnOnce(E) -> Fut,
        Fut: IntoFuture<Output = E2>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error).await),
        }
    }

    /// Like [`bind`](Outcome::bind), awaiting the bound outcome.
    pub async fn bind_async<U, F, Fut>(self, function: F) -> Outcome<E, U>
    where
        F: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = Outcome<E, U>>,
    {
        match self {
            Self::Success(value) => function(value).await,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Like [`ensure`](Outcome::ensure), awaiting the predicate.
    pub async fn ensure_async<P, Fut>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> Fut,
        Fut: IntoFuture<Output = bool>,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value).await {
                    Self::Success(value)
                } else {
                    Self::Failure(error)
                }
            }
            Self::Failure(original) => Self::Failure(original),
        }
    }

    /// Like [`recover`](Outcome::recover), awaiting the recovered value.
    pub async fn recover_async<F, Fut>(self, function: F) -> Self
    where
        F: FnOnce(E) -> Fut,
        Fut: IntoFuture<Output = T>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Success(function(error).await),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Like [`on_success`](Outcome::on_success), awaiting the action.
    pub async fn on_success_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: IntoFuture<Output = ()>,
    {
        if let Self::Success(value) = &self {
            action(value).await;
        }
        self
    }

    /// Like [`on_failure`](Outcome::on_failure), awaiting the action.
    pub async fn on_failure_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(&E) -> Fut,
        Fut: IntoFuture<Output = ()>,
    {
        if let Self::Failure(error) = &self {
            action(error).await;
        }
        self
    }

    /// Like [`switch`](Outcome::switch), awaiting whichever action runs.
    pub async fn switch_async<F, G, FutF, FutG>(self, on_success: F, on_failure: G) -> Self
    where
        F: FnOnce(&T) -> FutF,
        G: FnOnce(&E) -> FutG,
        FutF: IntoFuture<Output = ()>,
        FutG: IntoFuture<Output = ()>,
    {
        match &self {
            Self::Success(value) => on_success(value).await,
            Self::Failure(error) => on_failure(error).await,
        }
        self
    }

    // =========================================================================
    // Query Shape
    // =========================================================================

    /// Alias of [`map_async`](Self::map_async).
    pub async fn select_async<U, F, Fut>(self, selector: F) -> Outcome<E, U>
    where
        F: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = U>,
    {
        self.map_async(selector).await
    }

    /// Like [`select_many`](Outcome::select_many), awaiting the binder.
    pub async fn select_many_async<U, V, B, Fut, P>(self, binder: B, projector: P) -> Outcome<E, V>
    where
        B: FnOnce(&T) -> Fut,
        Fut: IntoFuture<Output = Outcome<E, U>>,
        P: FnOnce(T, U) -> V,
    {
        match self {
            Self::Success(value) => match binder(&value).await {
                Outcome::Success(intermediate) => Outcome::Success(projector(value, intermediate)),
                Outcome::Failure(error) => Outcome::Failure(error),
            },
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

/// `*_async` combinators on any future that resolves to an [`Outcome`].
///
/// Each method awaits the receiver, then delegates to the inherent method of
/// the same name, so a pipeline reads top to bottom without intermediate
/// `.await`s.
///
/// # Examples
///
/// ```rust
/// use std::future::ready;
///
/// use railway::control::Outcome;
/// use railway::future::OutcomeFutureExt;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let outcome = ready(Outcome::<&str, i32>::success(2))
///     .map_async(|value| async move { value + 1 })
///     .ensure_async(|value| ready(*value > 0), "bad")
///     .await;
/// assert_eq!(outcome, Outcome::success(3));
/// # });
/// ```
pub trait OutcomeFutureExt<E, T>: Future<Output = Outcome<E, T>> + Sized {
    /// Awaits the receiver, then [`Outcome::fold_async`].
    fn fold_async<U, F, G, FutF, FutG>(
        self,
        success_function: F,
        failure_function: G,
    ) -> impl Future<Output = U>
    where
        F: FnOnce(T) -> FutF,
        G: FnOnce(E) -> FutG,
        FutF: IntoFuture<Output = U>,
        FutG: IntoFuture<Output = U>,
    {
        async move {
            self.await
                .fold_async(success_function, failure_function)
                .await
        }
    }

    /// Awaits the receiver, then [`Outcome::map_async`].
    fn map_async<U, F, Fut>(self, function: F) -> impl Future<Output = Outcome<E, U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = U>,
    {
        async move { self.await.map_async(function).await }
    }

    /// Awaits the receiver, then [`Outcome::map_error_async`].
    fn map_error_async<E2, F, Fut>(self, function: F) -> impl Future<Output = Outcome<E2, T>>
    where
        F: FnOnce(E) -> Fut,
        Fut: IntoFuture<Output = E2>,
    {
        async move { self.await.map_error_async(function).await }
    }

    /// Awaits the receiver, then [`Outcome::bind_async`].
    fn bind_async<U, F, Fut>(self, function: F) -> impl Future<Output = Outcome<E, U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = Outcome<E, U>>,
    {
        async move { self.await.bind_async(function).await }
    }

    /// Awaits the receiver, then [`Outcome::ensure_async`].
    fn ensure_async<P, Fut>(self, predicate: P, error: E) -> impl Future<Output = Outcome<E, T>>
    where
        P: FnOnce(&T) -> Fut,
        Fut: IntoFuture<Output = bool>,
    {
        async move { self.await.ensure_async(predicate, error).await }
    }

    /// Awaits the receiver, then [`Outcome::recover_async`].
    fn recover_async<F, Fut>(self, function: F) -> impl Future<Output = Outcome<E, T>>
    where
        F: FnOnce(E) -> Fut,
        Fut: IntoFuture<Output = T>,
    {
        async move { self.await.recover_async(function).await }
    }

    /// Awaits the receiver, then [`Outcome::on_success_async`].
    fn on_success_async<F, Fut>(self, action: F) -> impl Future<Output = Outcome<E, T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: IntoFuture<Output = ()>,
    {
        async move { self.await.on_success_async(action).await }
    }

    /// Awaits the receiver, then [`Outcome::on_failure_async`].
    fn on_failure_async<F, Fut>(self, action: F) -> impl Future<Output = Outcome<E, T>>
    where
        F: FnOnce(&E) -> Fut,
        Fut: IntoFuture<Output = ()>,
    {
        async move { self.await.on_failure_async(action).await }
    }

    /// Awaits the receiver, then [`Outcome::switch_async`].
    fn switch_async<F, G, FutF, FutG>(
        self,
        on_success: F,
        on_failure: G,
    ) -> impl Future<Output = Outcome<E, T>>
    where
        F: FnOnce(&T) -> FutF,
        G: FnOnce(&E) -> FutG,
        FutF: IntoFuture<Output = ()>,
        FutG: IntoFuture<Output = ()>,
    {
        async move { self.await.switch_async(on_success, on_failure).await }
    }

    /// Awaits the receiver, then [`Outcome::value_or_else_async`].
    fn value_or_else_async<F, Fut>(self, function: F) -> impl Future<Output = T>
    where
        F: FnOnce(E) -> Fut,
        Fut: IntoFuture<Output = T>,
    {
        async move { self.await.value_or_else_async(function).await }
    }

    /// Awaits the receiver, then [`Outcome::select_async`].
    fn select_async<U, F, Fut>(self, selector: F) -> impl Future<Output = Outcome<E, U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: IntoFuture<Output = U>,
    {
        async move { self.await.select_async(selector).await }
    }

    /// Awaits the receiver, then [`Outcome::select_many_async`].
    fn select_many_async<U, V, B, Fut, P>(
        self,
        binder: B,
        projector: P,
    ) -> impl Future<Output = Outcome<E, V>>
    where
        B: FnOnce(&T) -> Fut,
        Fut: IntoFuture<Output = Outcome<E, U>>,
        P: FnOnce(T, U) -> V,
    {
        async move { self.await.select_many_async(binder, projector).await }
    }

    /// Awaits the receiver, then applies the synchronous
    /// [`Outcome::to_optional`].
    fn to_optional_async(self) -> impl Future<Output = Optional<T>> {
        async move { self.await.to_optional() }
    }
}

impl<E, T, F> OutcomeFutureExt<E, T> for F where F: Future<Output = Outcome<E, T>> {}
