use beryl::BerylError;
use beryl::core::commands::CommandSpec;
use beryl::core::commands::list::BRPop;
use bytes::Bytes;

#[tokio::test]
async fn test_brpop_frame_shape() {
    let cmd = BRPop::new(
        Bytes::from_static(b"a"),
        vec![Bytes::from_static(b"b")],
        2,
    )
    .unwrap();
    assert_eq!(cmd.name(), "BRPOP");
    assert_eq!(
        cmd.to_resp_args(),
        vec![
            Bytes::from_static(b"a"),
            Bytes::from_static(b"b"),
            Bytes::from_static(b"2"),
        ]
    );
}

#[tokio::test]
async fn test_brpop_negative_timeout_rejected() {
    let err = BRPop::new(Bytes::from_static(b"k"), vec![], -7).unwrap_err();
    assert_eq!(
        err,
        BerylError::InvalidArgument("timeout must be greater equal 0".to_string())
    );
}
