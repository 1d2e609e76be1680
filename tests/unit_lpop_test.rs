use beryl::core::commands::CommandSpec;
use beryl::core::commands::list::LPop;
use bytes::Bytes;

#[tokio::test]
async fn test_lpop_frame_shape() {
    let cmd = LPop {
        key: Bytes::from_static(b"mylist"),
    };
    assert_eq!(cmd.name(), "LPOP");
    assert_eq!(cmd.to_resp_args(), vec![Bytes::from_static(b"mylist")]);
}
