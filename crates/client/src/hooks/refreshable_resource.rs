use std::{future::Future, marker::PhantomData};

use dioxus::{
    hooks::{use_context, use_context_provider, use_resource, Resource},
    signals::{ReadableExt, Signal},
};

/// A hook that wraps `use_resource` and adds a signal to the context that can be used to refresh the resource.
///
/// The chatbot list page fetches through this so that a descendant (the
/// per-row action menu) can invalidate the list after a successful delete
/// without holding a reference to the resource itself.
///
/// ### Example
///
/// ```rust,ignore
/// // In the page component. Can be used just like `use_resource`.
/// let chatbots: Resource<T> = use_refreshable_resource(|| async {
///     // Fetch the list
/// });
///
/// // In a child component, trigger a one-shot re-fetch.
/// // The `T` here is the same as the `T` in `chatbots: Resource<T>` above.
/// let mut refresh: Signal<()> = use_refresh_resource::<T>();
/// refresh.write();
/// ```
pub fn use_refreshable_resource<T, F>(mut future: impl FnMut() -> F + 'static) -> Resource<T>
where
    T: 'static,
    F: Future<Output = T> + 'static,
{
    let context =
        use_context_provider::<(Signal<()>, PhantomData<T>)>(|| (Signal::new(()), PhantomData));
    use_resource(move || {
        context.0.read();
        future()
    })
}

/// See `use_refreshable_resource`.
pub fn use_refresh_resource<T>() -> Signal<()>
where
    T: 'static + Clone,
{
    let context = use_context::<(Signal<()>, PhantomData<T>)>();
    context.0
}
