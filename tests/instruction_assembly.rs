//! End to end instruction assembly: derive the accounts, encode the
//! parameters and hand the result to the Solana SDK.

use anchor_program_clients::{
    assemble, codec, encode_instruction, find_program_address, kamino, AccountRole, ClientConfig,
    CodecError, Discriminator, InstructionRecord, RoleMeta, DISCRIMINATOR_LEN,
};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::{instruction::Instruction, message::Message, pubkey::Pubkey};

#[derive(Debug, PartialEq, BorshSerialize, BorshDeserialize)]
struct OpenPosition {
    price: u64,
    size: u64,
    referrer: Option<Pubkey>,
}

const OPEN_POSITION: Discriminator = Discriminator::from_bytes([1, 2, 3, 4, 5, 6, 7, 8]);

#[test]
fn payload_is_discriminator_then_params() {
    let params = OpenPosition {
        price: 10,
        size: 20,
        referrer: None,
    };
    let encoded = codec::encode(&params).unwrap();
    assert_eq!(encoded.len(), 17);

    let record = assemble(Pubkey::new_unique(), vec![], &OPEN_POSITION, &encoded);
    assert_eq!(record.data().len(), DISCRIMINATOR_LEN + encoded.len());
    assert_eq!(&record.data()[..8], &[1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(&record.data()[8..], encoded.as_slice());

    let encoded_directly =
        encode_instruction(record.program_id(), vec![], &OPEN_POSITION, &params).unwrap();
    assert_eq!(encoded_directly, record);
    assert_eq!(record.params::<OpenPosition>(&OPEN_POSITION).unwrap(), params);
}

#[test]
fn derived_accounts_flow_into_message() {
    let program = Pubkey::new_unique();
    let owner = Pubkey::new_unique();
    let market = Pubkey::new_unique();
    let position = find_program_address(&[b"position", owner.as_ref(), market.as_ref()], &program)
        .unwrap()
        .address;

    let record = encode_instruction(
        program,
        vec![
            RoleMeta::writable_signer(owner),
            RoleMeta::writable(position),
            RoleMeta::readonly(market),
        ],
        &OPEN_POSITION,
        &OpenPosition {
            price: 1,
            size: 2,
            referrer: Some(owner),
        },
    )
    .unwrap();
    assert_eq!(record.program().role, AccountRole::Invoked);
    assert_eq!(record.data().len(), 8 + 8 + 8 + 33);

    let ix: Instruction = record.into();
    let message = Message::new(&[ix], Some(&owner));
    assert_eq!(message.header.num_required_signatures, 1);
    assert_eq!(message.account_keys[0], owner);
    assert!(message.account_keys.contains(&position));
    assert!(message.account_keys.contains(&program));
}

#[test]
fn foreign_payload_is_rejected() {
    let record: InstructionRecord = kamino::KaminoLendClient::new(&ClientConfig::default(), Pubkey::new_unique())
        .unwrap()
        .refresh_reserves_batch(false)
        .unwrap();
    assert!(matches!(
        record.params::<OpenPosition>(&OPEN_POSITION),
        Err(CodecError::DiscriminatorMismatch { .. })
    ));
    assert_eq!(
        kamino::REFRESH_RESERVES_BATCH
            .decode_params::<kamino::RefreshReservesBatchParams>(record.data())
            .unwrap(),
        kamino::RefreshReservesBatchParams {
            skip_price_updates: false
        }
    );
}

#[test]
fn kamino_setup_sequence() {
    let config = ClientConfig::default();
    let owner = Pubkey::new_unique();
    let client = kamino::KaminoLendClient::new(&config, owner).unwrap();
    let market = Pubkey::new_unique();

    let metadata = client.init_user_metadata(None, Pubkey::default()).unwrap();
    let (obligation_ix, obligation) = client
        .init_obligation(market, kamino::InitObligationArgs::default())
        .unwrap();

    // The obligation links back to the metadata account created first.
    let owner_metadata = client.owner_metadata().address;
    assert_eq!(metadata.accounts()[2].pubkey, owner_metadata);
    assert_eq!(
        obligation_ix.accounts()[kamino::INIT_OBLIGATION.position("owner_user_metadata").unwrap()]
            .pubkey,
        owner_metadata
    );

    let ixs: Vec<Instruction> = vec![metadata.into(), obligation_ix.into()];
    let message = Message::new(&ixs, Some(&owner));
    assert_eq!(message.header.num_required_signatures, 1);
    assert!(message.account_keys.contains(&obligation));
    assert!(message.account_keys.contains(&config.kamino_lend_program));
}
