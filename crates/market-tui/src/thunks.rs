//! Async action creators
//!
//! Each creator performs exactly one remote call. On success it dispatches the
//! action that puts the payload into its store sub-tree and returns the
//! payload; on failure it returns the user-facing error list and leaves the
//! store alone. Fetches are the exception: they also report `Started` and
//! `Failed` so the view can show progress and leave `Loading`.
//!
//! `Thunks::run` executes a data-described `Thunk` and routes the outcome back
//! to the component that asked for it.

use std::sync::Arc;

use market_client::{
    ApiError, Credentials, Item, ItemId, ItemImage, ItemUpdate, MarketClient, NewItem,
    NewItemImage, Order, Review, User,
};

use crate::actions::{
    Action, AddImageAction, FetchAction, ItemFormAction, LoginOrigin, SessionAction,
    SignInAction, StatusBarAction, Thunk, ThunkResult,
};
use crate::dispatcher::Dispatcher;
use crate::route::Route;
use crate::state::{Notice, RequestIds};

/// Action creators bound to a client and the shared request id counter
#[derive(Clone)]
pub struct Thunks {
    client: Arc<dyn MarketClient>,
    requests: RequestIds,
}

fn error_list(error: ApiError) -> Vec<String> {
    log::warn!("API call failed: {}", error);
    error.messages()
}

impl Thunks {
    pub fn new(client: Arc<dyn MarketClient>, requests: RequestIds) -> Self {
        Self { client, requests }
    }

    pub async fn get_item_details(
        &self,
        item_id: ItemId,
        dispatcher: &Dispatcher,
    ) -> ThunkResult<Item> {
        let request = self.requests.next();
        dispatcher.dispatch(Action::ItemPage(FetchAction::Started(request)));

        match self.client.fetch_item(item_id).await {
            Ok(item) => {
                dispatcher.dispatch(Action::ItemPage(FetchAction::Loaded(request, item.clone())));
                Ok(item)
            }
            Err(e) => {
                let errors = error_list(e);
                dispatcher.dispatch(Action::ItemPage(FetchAction::Failed(
                    request,
                    errors.join("; "),
                )));
                Err(errors)
            }
        }
    }

    pub async fn get_item_reviews(
        &self,
        item_id: ItemId,
        dispatcher: &Dispatcher,
    ) -> ThunkResult<Vec<Review>> {
        let request = self.requests.next();
        dispatcher.dispatch(Action::ItemReviews(FetchAction::Started(request)));

        match self.client.fetch_item_reviews(item_id).await {
            Ok(reviews) => {
                dispatcher.dispatch(Action::ItemReviews(FetchAction::Loaded(
                    request,
                    reviews.clone(),
                )));
                Ok(reviews)
            }
            Err(e) => {
                let errors = error_list(e);
                dispatcher.dispatch(Action::ItemReviews(FetchAction::Failed(
                    request,
                    errors.join("; "),
                )));
                Err(errors)
            }
        }
    }

    pub async fn edit_item(
        &self,
        update: &ItemUpdate,
        item_id: ItemId,
        dispatcher: &Dispatcher,
    ) -> ThunkResult<Item> {
        let item = self.client.update_item(item_id, update).await.map_err(error_list)?;
        dispatcher.dispatch(Action::ItemPage(FetchAction::Set(item.clone())));
        Ok(item)
    }

    pub async fn create_item(&self, new_item: &NewItem, dispatcher: &Dispatcher) -> ThunkResult<Item> {
        let item = self.client.create_item(new_item).await.map_err(error_list)?;
        dispatcher.dispatch(Action::ItemPage(FetchAction::Set(item.clone())));
        Ok(item)
    }

    pub async fn delete_item(&self, item_id: ItemId, dispatcher: &Dispatcher) -> ThunkResult<()> {
        self.client.delete_item(item_id).await.map_err(error_list)?;
        dispatcher.dispatch(Action::ItemPage(FetchAction::Clear));
        dispatcher.dispatch(Action::ItemReviews(FetchAction::Clear));
        Ok(())
    }

    /// Attach an image to a listing
    ///
    /// The response only describes the image, so the item page is brought up
    /// to date by re-fetching the item (see `run`).
    pub async fn add_item_image(
        &self,
        item_id: ItemId,
        image: &NewItemImage,
    ) -> ThunkResult<ItemImage> {
        self.client
            .add_item_image(item_id, image)
            .await
            .map_err(error_list)
    }

    pub async fn get_orders(&self, dispatcher: &Dispatcher) -> ThunkResult<Vec<Order>> {
        let request = self.requests.next();
        dispatcher.dispatch(Action::Orders(FetchAction::Started(request)));

        match self.client.fetch_orders().await {
            Ok(orders) => {
                dispatcher.dispatch(Action::Orders(FetchAction::Loaded(request, orders.clone())));
                Ok(orders)
            }
            Err(e) => {
                let errors = error_list(e);
                dispatcher.dispatch(Action::Orders(FetchAction::Failed(
                    request,
                    errors.join("; "),
                )));
                Err(errors)
            }
        }
    }

    pub async fn login(&self, credentials: &Credentials, dispatcher: &Dispatcher) -> ThunkResult<User> {
        let user = self.client.login(credentials).await.map_err(error_list)?;
        dispatcher.dispatch(Action::Session(SessionAction::Set(user.clone())));
        Ok(user)
    }

    pub async fn logout(&self, dispatcher: &Dispatcher) -> ThunkResult<()> {
        self.client.logout().await.map_err(error_list)?;
        dispatcher.dispatch(Action::Session(SessionAction::Clear));
        dispatcher.dispatch(Action::Orders(FetchAction::Clear));
        Ok(())
    }

    /// Execute a thunk and report its outcome to whoever dispatched it
    pub async fn run(self, thunk: Thunk, dispatcher: Dispatcher) {
        log::debug!("Running thunk {:?}", thunk);
        match thunk {
            Thunk::GetItemDetails { item_id } => {
                let _ = self.get_item_details(item_id, &dispatcher).await;
            }
            Thunk::GetItemReviews { item_id } => {
                let _ = self.get_item_reviews(item_id, &dispatcher).await;
            }
            Thunk::GetOrders => {
                let _ = self.get_orders(&dispatcher).await;
            }
            Thunk::EditItem { item_id, update } => {
                let outcome = self.edit_item(&update, item_id, &dispatcher).await;
                dispatcher.dispatch(Action::ItemForm(ItemFormAction::Settled(
                    outcome.map(|item| item.id),
                )));
            }
            Thunk::CreateItem { item } => {
                let outcome = self.create_item(&item, &dispatcher).await;
                dispatcher.dispatch(Action::ItemForm(ItemFormAction::Settled(
                    outcome.map(|item| item.id),
                )));
            }
            Thunk::DeleteItem { item_id } => match self.delete_item(item_id, &dispatcher).await {
                Ok(()) => {
                    dispatcher.dispatch(Action::go_to(Route::Home));
                    notify(&dispatcher, Notice::info(format!("Item {} deleted", item_id)));
                }
                Err(errors) => notify(&dispatcher, Notice::error(errors.join("; "))),
            },
            Thunk::AddItemImage { item_id, image } => {
                let outcome = self.add_item_image(item_id, &image).await;
                if let Ok(added) = &outcome {
                    log::info!("Added image {} to item {}", added.id, item_id);
                    dispatcher.dispatch(Action::thunk(Thunk::GetItemDetails { item_id }));
                    notify(&dispatcher, Notice::info("Image added"));
                }
                dispatcher.dispatch(Action::AddImage(AddImageAction::Settled(outcome.map(|_| ()))));
            }
            Thunk::Login {
                credentials,
                origin,
            } => {
                let outcome = self.login(&credentials, &dispatcher).await;
                match origin {
                    LoginOrigin::SignInForm => {
                        dispatcher.dispatch(Action::SignIn(SignInAction::Settled(
                            outcome.map(|_| ()),
                        )));
                    }
                    LoginOrigin::DemoButton => match outcome {
                        Ok(user) => {
                            notify(&dispatcher, Notice::info(format!("Logged in as {}", user.username)))
                        }
                        Err(errors) => notify(&dispatcher, Notice::error(errors.join("; "))),
                    },
                }
            }
            Thunk::Logout => {
                if let Err(errors) = self.logout(&dispatcher).await {
                    notify(&dispatcher, Notice::error(errors.join("; ")));
                }
            }
        }
    }
}

fn notify(dispatcher: &Dispatcher, notice: Notice) {
    dispatcher.dispatch(Action::StatusBar(StatusBarAction::Show(notice)));
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::reducers::app_reducer::reduce;
    use crate::state::{AppState, FetchStatus, RequestId};
    use async_trait::async_trait;
    use market_client::ApiResult;
    use std::collections::VecDeque;
    use std::sync::mpsc::{self, Receiver};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Scripted client; every call pops the next canned response
    #[derive(Default)]
    pub(crate) struct MockClient {
        pub items: Mutex<VecDeque<Result<Item, Vec<String>>>>,
        pub updates: Mutex<VecDeque<Result<Item, Vec<String>>>>,
        /// (delay in ms, response)
        pub orders: Mutex<VecDeque<(u64, Vec<Order>)>>,
        pub logins: Mutex<VecDeque<Result<User, Vec<String>>>>,
        pub images: Mutex<VecDeque<Result<ItemImage, Vec<String>>>>,
        pub calls: Mutex<Vec<String>>,
    }

    impl MockClient {
        fn record(&self, call: impl Into<String>) {
            self.calls.lock().unwrap().push(call.into());
        }

        fn pop<T>(queue: &Mutex<VecDeque<Result<T, Vec<String>>>>) -> ApiResult<T> {
            queue
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(vec!["no canned response".to_string()]))
                .map_err(ApiError::Validation)
        }
    }

    #[async_trait]
    impl MarketClient for MockClient {
        async fn fetch_item(&self, item_id: ItemId) -> ApiResult<Item> {
            self.record(format!("fetch_item {item_id}"));
            Self::pop(&self.items)
        }

        async fn fetch_item_reviews(&self, item_id: ItemId) -> ApiResult<Vec<Review>> {
            self.record(format!("fetch_item_reviews {item_id}"));
            Ok(Vec::new())
        }

        async fn update_item(&self, item_id: ItemId, _update: &ItemUpdate) -> ApiResult<Item> {
            self.record(format!("update_item {item_id}"));
            Self::pop(&self.updates)
        }

        async fn create_item(&self, _item: &NewItem) -> ApiResult<Item> {
            self.record("create_item");
            Self::pop(&self.updates)
        }

        async fn delete_item(&self, item_id: ItemId) -> ApiResult<()> {
            self.record(format!("delete_item {item_id}"));
            Ok(())
        }

        async fn add_item_image(&self, item_id: ItemId, image: &NewItemImage) -> ApiResult<ItemImage> {
            self.record(format!("add_item_image {item_id} {}", image.url));
            Self::pop(&self.images)
        }

        async fn fetch_orders(&self) -> ApiResult<Vec<Order>> {
            self.record("fetch_orders");
            let next = self.orders.lock().unwrap().pop_front();
            match next {
                Some((delay, orders)) => {
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                    Ok(orders)
                }
                None => Err(ApiError::Status {
                    status: 401,
                    message: "Authentication required".to_string(),
                }),
            }
        }

        async fn login(&self, credentials: &Credentials) -> ApiResult<User> {
            self.record(format!("login {}", credentials.email));
            Self::pop(&self.logins)
        }

        async fn logout(&self) -> ApiResult<()> {
            self.record("logout");
            Ok(())
        }
    }

    pub(crate) fn item(id: ItemId, name: &str) -> Item {
        Item {
            id,
            seller_id: Some(1),
            name: name.to_string(),
            price: 12.5,
            description: "A thing".to_string(),
            image_urls: Vec::new(),
            shop_name: "Shop".to_string(),
            shop_sales: 3,
            shop_reviews: 2,
            avg_shop_rating: 4.5,
            item_reviews: 0,
        }
    }

    pub(crate) fn order(id: u64) -> Order {
        Order {
            id,
            order_date: "Tue, 05 Mar 2024 10:00:00 GMT".to_string(),
            total_items: 1,
            total_price: 9.99,
            items: Vec::new(),
        }
    }

    fn setup(client: MockClient) -> (Thunks, Arc<MockClient>, Dispatcher, Receiver<Action>) {
        let client = Arc::new(client);
        let thunks = Thunks::new(client.clone(), RequestIds::new());
        let (tx, rx) = mpsc::channel();
        (thunks, client, Dispatcher::new(tx), rx)
    }

    fn fold(rx: &Receiver<Action>, state: AppState) -> AppState {
        rx.try_iter().fold(state, |state, action| reduce(state, &action))
    }

    #[tokio::test]
    async fn test_get_item_details_sets_item_page() {
        let mock = MockClient::default();
        mock.items.lock().unwrap().push_back(Ok(item(7, "Vase")));
        let (thunks, _, dispatcher, rx) = setup(mock);

        let item = thunks.get_item_details(7, &dispatcher).await.unwrap();
        assert_eq!(item.name, "Vase");

        let actions: Vec<Action> = rx.try_iter().collect();
        assert!(matches!(
            actions[0],
            Action::ItemPage(FetchAction::Started(RequestId(1)))
        ));
        assert!(matches!(
            &actions[1],
            Action::ItemPage(FetchAction::Loaded(RequestId(1), item)) if item.id == 7
        ));
    }

    #[tokio::test]
    async fn test_fetch_failure_reports_errored() {
        let mock = MockClient::default();
        mock.items
            .lock()
            .unwrap()
            .push_back(Err(vec!["Item couldn't be found".to_string()]));
        let (thunks, _, dispatcher, rx) = setup(mock);

        let errors = thunks.get_item_details(99, &dispatcher).await.unwrap_err();
        assert_eq!(errors, vec!["Item couldn't be found".to_string()]);

        let state = fold(&rx, AppState::default());
        assert_eq!(state.item_page.error(), Some("Item couldn't be found"));
    }

    #[tokio::test]
    async fn test_edit_item_failure_leaves_store_untouched() {
        let mock = MockClient::default();
        mock.updates
            .lock()
            .unwrap()
            .push_back(Err(vec!["Name can't be blank".to_string()]));
        let (thunks, _, dispatcher, rx) = setup(mock);

        let update = ItemUpdate {
            name: String::new(),
            price: 1.0,
            description: "x".to_string(),
        };
        let errors = thunks.edit_item(&update, 7, &dispatcher).await.unwrap_err();
        assert_eq!(errors, vec!["Name can't be blank".to_string()]);
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[tokio::test]
    async fn test_edit_item_success_sets_item() {
        let mock = MockClient::default();
        mock.updates.lock().unwrap().push_back(Ok(item(7, "Blue Vase")));
        let (thunks, _, dispatcher, rx) = setup(mock);

        let update = ItemUpdate {
            name: "Blue Vase".to_string(),
            price: 12.5,
            description: "A thing".to_string(),
        };
        let item = thunks.edit_item(&update, 7, &dispatcher).await.unwrap();
        assert_eq!(item.id, 7);

        let state = fold(&rx, AppState::default());
        assert_eq!(state.item_page.data().map(|i| i.name.as_str()), Some("Blue Vase"));
    }

    #[tokio::test]
    async fn test_newest_orders_request_wins() {
        let mock = MockClient::default();
        {
            let mut orders = mock.orders.lock().unwrap();
            // the first request resolves last
            orders.push_back((60, vec![order(1)]));
            orders.push_back((0, vec![order(1), order(2)]));
        }
        let (thunks, _, dispatcher, rx) = setup(mock);

        let first = tokio::spawn({
            let thunks = thunks.clone();
            let dispatcher = dispatcher.clone();
            async move { thunks.get_orders(&dispatcher).await }
        });
        tokio::time::sleep(Duration::from_millis(5)).await;
        let second = thunks.get_orders(&dispatcher).await;

        assert_eq!(second.unwrap().len(), 2);
        assert_eq!(first.await.unwrap().unwrap().len(), 1);

        let state = fold(&rx, AppState::default());
        match &state.orders.status {
            FetchStatus::Loaded(orders) => assert_eq!(orders.len(), 2),
            other => panic!("unexpected orders state {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_run_routes_edit_outcome_to_form() {
        let mock = MockClient::default();
        mock.updates.lock().unwrap().push_back(Ok(item(7, "Vase")));
        let (thunks, _, dispatcher, rx) = setup(mock);

        let update = ItemUpdate {
            name: "Vase".to_string(),
            price: 12.5,
            description: "A thing".to_string(),
        };
        thunks
            .run(Thunk::EditItem { item_id: 7, update }, dispatcher)
            .await;

        let actions: Vec<Action> = rx.try_iter().collect();
        assert!(matches!(
            actions.last(),
            Some(Action::ItemForm(ItemFormAction::Settled(Ok(7))))
        ));
    }

    #[tokio::test]
    async fn test_demo_login_sets_session_and_notifies() {
        let mock = MockClient::default();
        mock.logins.lock().unwrap().push_back(Ok(User {
            id: 1,
            username: "demo".to_string(),
            email: "demo@aa.io".to_string(),
        }));
        let (thunks, client, dispatcher, rx) = setup(mock);

        thunks
            .run(
                Thunk::Login {
                    credentials: Credentials::new("demo@aa.io", "password"),
                    origin: LoginOrigin::DemoButton,
                },
                dispatcher,
            )
            .await;

        let state = fold(&rx, AppState::default());
        assert_eq!(state.session.username(), Some("demo"));
        assert_eq!(
            state.status_bar.notice,
            Some(Notice::info("Logged in as demo"))
        );
        assert_eq!(client.calls.lock().unwrap().as_slice(), ["login demo@aa.io"]);
    }

    #[tokio::test]
    async fn test_sign_in_failure_goes_back_to_form() {
        let mock = MockClient::default();
        mock.logins
            .lock()
            .unwrap()
            .push_back(Err(vec!["The provided credentials were invalid.".to_string()]));
        let (thunks, _, dispatcher, rx) = setup(mock);

        thunks
            .run(
                Thunk::Login {
                    credentials: Credentials::new("x@y.z", "nope"),
                    origin: LoginOrigin::SignInForm,
                },
                dispatcher,
            )
            .await;

        let state = fold(&rx, AppState::default());
        assert!(!state.session.is_logged_in());
        assert_eq!(
            state.sign_in.errors,
            vec!["The provided credentials were invalid.".to_string()]
        );
    }

    #[tokio::test]
    async fn test_delete_item_navigates_home() {
        let (thunks, _, dispatcher, rx) = setup(MockClient::default());
        let state = reduce(AppState::default(), &Action::go_to(Route::Item(7)));
        let state = reduce(state, &Action::ItemPage(FetchAction::Set(item(7, "Vase"))));

        thunks.run(Thunk::DeleteItem { item_id: 7 }, dispatcher).await;

        let state = fold(&rx, state);
        assert_eq!(state.active_route(), Route::Home);
        assert_eq!(state.item_page.status, FetchStatus::Unloaded);
    }

    fn new_image() -> NewItemImage {
        NewItemImage {
            url: "https://img/3.png".to_string(),
            preview_image: false,
        }
    }

    #[tokio::test]
    async fn test_add_image_success_refetches_item_and_closes_popup() {
        let mock = MockClient::default();
        mock.images.lock().unwrap().push_back(Ok(ItemImage {
            id: 12,
            url: "https://img/3.png".to_string(),
            preview_image: false,
        }));
        let (thunks, client, dispatcher, rx) = setup(mock);
        let state = reduce(AppState::default(), &Action::AddImage(AddImageAction::Open(7)));
        let state = reduce(state, &Action::AddImage(AddImageAction::Submitting));

        thunks
            .run(
                Thunk::AddItemImage {
                    item_id: 7,
                    image: new_image(),
                },
                dispatcher,
            )
            .await;

        let actions: Vec<Action> = rx.try_iter().collect();
        assert!(matches!(
            actions.first(),
            Some(Action::Thunk(Thunk::GetItemDetails { item_id: 7 }))
        ));
        assert_eq!(
            client.calls.lock().unwrap().as_slice(),
            ["add_item_image 7 https://img/3.png"]
        );

        let state = actions.iter().fold(state, |state, action| reduce(state, action));
        assert!(state.add_image.is_none());
        assert_eq!(state.status_bar.notice, Some(Notice::info("Image added")));
    }

    #[tokio::test]
    async fn test_add_image_failure_reports_to_popup() {
        let mock = MockClient::default();
        mock.images
            .lock()
            .unwrap()
            .push_back(Err(vec!["Forbidden".to_string()]));
        let (thunks, _, dispatcher, rx) = setup(mock);
        let state = reduce(AppState::default(), &Action::AddImage(AddImageAction::Open(7)));
        let state = reduce(state, &Action::AddImage(AddImageAction::Submitting));

        thunks
            .run(
                Thunk::AddItemImage {
                    item_id: 7,
                    image: new_image(),
                },
                dispatcher,
            )
            .await;

        let actions: Vec<Action> = rx.try_iter().collect();
        assert!(!actions.iter().any(|a| matches!(a, Action::Thunk(_))));
        let state = actions.iter().fold(state, |state, action| reduce(state, action));
        let form = state.add_image.expect("popup stays open");
        assert!(!form.is_submitting());
        assert_eq!(form.errors, vec!["Forbidden".to_string()]);
    }

    #[tokio::test]
    async fn test_logout_clears_session_and_orders() {
        let (thunks, _, dispatcher, rx) = setup(MockClient::default());
        let state = reduce(
            AppState::default(),
            &Action::Session(SessionAction::Set(User {
                id: 1,
                username: "demo".to_string(),
                email: String::new(),
            })),
        );
        let state = reduce(state, &Action::Orders(FetchAction::Set(vec![order(1)])));

        thunks.logout(&dispatcher).await.unwrap();

        let state = fold(&rx, state);
        assert!(!state.session.is_logged_in());
        assert_eq!(state.orders.status, FetchStatus::Unloaded);
    }
}
