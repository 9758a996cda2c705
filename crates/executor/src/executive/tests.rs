use super::*;
use crate::{
    allocator,
    machine::{Exec, Machine, VmFactory},
    spec::CommonParams,
    state::{State, StateDb},
};
use helios_types::{Address, Bytes, U256};
use helios_vm_types::Error as VmError;
use primitives::{
    CallContractRequest, CreateContractRequest, LogEntry, TransactionStatus,
    TransferRequest,
};
use rustc_hex::FromHex;

fn addr(byte: u8) -> Address {
    Address::repeat_byte(byte)
}

struct StubVm {
    result: ExecutionResult,
}

impl Exec for StubVm {
    fn run_to_completion(
        &mut self, _state: &mut State, _env: &Env,
    ) -> ExecutionResult {
        self.result.clone()
    }
}

struct DepositingVm {
    beneficiary: Address,
    amount: U256,
}

impl Exec for DepositingVm {
    fn run_to_completion(
        &mut self, state: &mut State, _env: &Env,
    ) -> ExecutionResult {
        state.add_balance(&self.beneficiary, &self.amount).unwrap();
        ExecutionResult::successful()
    }
}

fn machine_returning(result: ExecutionResult) -> Machine {
    Machine::new(
        CommonParams::default(),
        VmFactory::new(move |_params| {
            Box::new(StubVm {
                result: result.clone(),
            }) as Box<dyn Exec>
        }),
    )
}

fn depositing_machine(beneficiary: Address, amount: u64) -> Machine {
    Machine::new(
        CommonParams::default(),
        VmFactory::new(move |_params| {
            Box::new(DepositingVm {
                beneficiary,
                amount: U256::from(amount),
            }) as Box<dyn Exec>
        }),
    )
}

fn transfer_tx(from: Address, to: Address, amount: u64) -> Transaction {
    Transaction::new(vec![Request::Transfer(TransferRequest {
        owner_address: from,
        to_address: to,
        amount: U256::from(amount),
    })])
}

fn create_tx(
    owner: Address, bytecode: Bytes, contract_address: Option<Address>,
) -> Transaction {
    Transaction::new(vec![Request::CreateContract(CreateContractRequest {
        owner_address: owner,
        bytecode,
        abi: vec![],
        contract_address,
    })])
}

fn call_tx(owner: Address, target: Address) -> Transaction {
    Transaction::new(vec![Request::CallContract(CallContractRequest {
        owner_address: owner,
        contract_address: target,
        data: vec![],
        call_value: U256::zero(),
    })])
}

fn seed_account(db: &Arc<StateDb>, address: Address, balance: u64) {
    let mut state = State::new(db.clone());
    state.add_balance(&address, &U256::from(balance)).unwrap();
    state.commit().unwrap();
}

fn seed_contract(db: &Arc<StateDb>, address: Address, code: Bytes) {
    let mut state = State::new(db.clone());
    state
        .create_account(address, AccountKind::Contract)
        .unwrap();
    state.save_code(address, code).unwrap();
    state.commit().unwrap();
}

#[test]
fn classifies_by_first_request() {
    let transfer = transfer_tx(addr(1), addr(2), 5);
    assert_eq!(
        transaction_kind(&transfer),
        TransactionKind::NativeOperation
    );

    let creation = create_tx(addr(1), vec![0x60], None);
    assert_eq!(
        transaction_kind(&creation),
        TransactionKind::ContractCreation
    );

    let call = call_tx(addr(1), addr(2));
    assert_eq!(transaction_kind(&call), TransactionKind::ContractCall);

    let empty = Transaction::new(vec![]);
    assert_eq!(transaction_kind(&empty), TransactionKind::NativeOperation);
}

#[test]
fn call_without_code_is_a_successful_noop() {
    let db = Arc::new(StateDb::new());
    // The stub would revert if it ever ran; a codeless target must not
    // reach it.
    let machine = machine_returning(ExecutionResult::reverted());
    let tx = call_tx(addr(1), addr(2));

    let mut state = State::new(db.clone());
    let mut executive =
        Executive::for_block(&tx, Env::default(), &machine, &mut state);
    executive.dispatch().unwrap();
    executive.run();
    let outcome = executive.finalize().unwrap();

    assert!(outcome.successful());
    assert!(outcome.result().is_none());
    assert!(outcome.delete_accounts().is_empty());
    assert!(outcome.logs().is_empty());
    assert_eq!(outcome.refund(), 0);
    assert_eq!(outcome.status(), TransactionStatus::Success);
    assert_eq!(db.account(&addr(2)).unwrap(), None);
}

#[test]
fn reverted_call_discards_effects_and_overlay() {
    let db = Arc::new(StateDb::new());
    let target = addr(0x20);
    seed_contract(&db, target, vec![0x60, 0x80]);
    seed_account(&db, addr(1), 50);

    // A result that carries effects despite reverting; the decision
    // must clear them all.
    let mut raw = ExecutionResult::reverted();
    raw.delete_accounts.push(addr(9));
    raw.logs.push(LogEntry {
        address: target,
        topics: vec![],
        data: vec![0x01],
    });
    raw.future_refund = 7;
    let machine = machine_returning(raw);

    let tx = call_tx(addr(1), target);
    let mut state = State::new(db.clone());
    let mut executive =
        Executive::for_block(&tx, Env::default(), &machine, &mut state);
    executive.dispatch().unwrap();
    executive.run();
    let outcome = executive.finalize().unwrap();

    assert!(!outcome.successful());
    assert_eq!(outcome.runtime_error(), Some("execution reverted"));
    assert!(outcome.delete_accounts().is_empty());
    assert!(outcome.logs().is_empty());
    assert_eq!(outcome.refund(), 0);
    assert_eq!(
        db.account(&addr(1)).unwrap().unwrap().balance,
        U256::from(50)
    );

    let receipt = outcome.make_receipt();
    assert_eq!(receipt.status, TransactionStatus::Failure);
    assert_eq!(receipt.error_message.as_deref(), Some("execution reverted"));
    assert!(receipt.logs.is_empty());
}

#[test]
fn failed_run_surfaces_the_fault_message() {
    let db = Arc::new(StateDb::new());
    let target = addr(0x20);
    seed_contract(&db, target, vec![0x60]);

    let mut raw = ExecutionResult::failed(VmError::OutOfGas);
    raw.future_refund = 3;
    let machine = machine_returning(raw);

    let tx = call_tx(addr(1), target);
    let mut state = State::new(db);
    let mut executive =
        Executive::for_block(&tx, Env::default(), &machine, &mut state);
    executive.dispatch().unwrap();
    executive.run();
    let outcome = executive.finalize().unwrap();

    assert_eq!(outcome.runtime_error(), Some("Out of gas"));
    assert_eq!(outcome.refund(), 0);
    assert_eq!(outcome.status(), TransactionStatus::Failure);
}

#[test]
fn constant_mode_never_commits() {
    let db = Arc::new(StateDb::new());
    let target = addr(0x20);
    seed_contract(&db, target, vec![0x60]);

    let machine = depositing_machine(addr(0x30), 10);
    let tx = call_tx(addr(1), target);

    let mut state = State::new(db.clone());
    let mut executive = Executive::for_constant(&tx, &machine, &mut state);
    executive.dispatch().unwrap();
    executive.run();
    let outcome = executive.finalize().unwrap();

    assert!(outcome.successful());
    // The run mutated the overlay, but nothing reached the store.
    assert_eq!(state.balance(&addr(0x30)).unwrap(), U256::from(10));
    assert_eq!(db.account(&addr(0x30)).unwrap(), None);
}

#[test]
fn pre_validation_leaves_the_overlay_to_the_caller() {
    let db = Arc::new(StateDb::new());
    let target = addr(0x20);
    seed_contract(&db, target, vec![0x60]);

    let machine = depositing_machine(addr(0x30), 10);
    let tx = call_tx(addr(1), target);

    let mut state = State::new(db.clone());
    let mut executive =
        Executive::for_pre_validation(&tx, &machine, &mut state);
    executive.dispatch().unwrap();
    executive.run();
    executive.finalize().unwrap();

    assert_eq!(db.account(&addr(0x30)).unwrap(), None);
    // The caller may still decide to commit its overlay.
    state.commit().unwrap();
    assert_eq!(
        db.account(&addr(0x30)).unwrap().unwrap().balance,
        U256::from(10)
    );
}

#[test]
fn block_mode_success_commits_the_overlay() {
    let db = Arc::new(StateDb::new());
    let target = addr(0x20);
    seed_contract(&db, target, vec![0x60]);

    let machine = depositing_machine(addr(0x30), 10);
    let tx = call_tx(addr(1), target);

    let mut state = State::new(db.clone());
    let mut executive =
        Executive::for_block(&tx, Env::default(), &machine, &mut state);
    executive.dispatch().unwrap();
    executive.run();
    let outcome = executive.finalize().unwrap();

    assert!(outcome.successful());
    assert_eq!(
        db.account(&addr(0x30)).unwrap().unwrap().balance,
        U256::from(10)
    );
}

#[test]
fn creation_deploys_at_the_derived_address() {
    let db = Arc::new(StateDb::new());
    let deployer = addr(0x5a);
    seed_account(&db, deployer, 100);

    let bytecode: Bytes = "6080604052".from_hex().unwrap();
    let tx = create_tx(deployer, bytecode.clone(), None);
    let machine = machine_returning(ExecutionResult::successful());
    let derived = allocator::derive_contract_address(&deployer);

    let mut state = State::new(db.clone());
    let mut executive =
        Executive::for_block(&tx, Env::default(), &machine, &mut state);
    executive.dispatch().unwrap();
    // Dispatch registers the contract in the overlay only.
    assert_eq!(db.code(&derived).unwrap(), None);

    executive.run();
    let outcome = executive.finalize().unwrap();

    assert!(outcome.successful());
    assert_eq!(db.code(&derived).unwrap(), Some(bytecode));
    let account = db.account(&derived).unwrap().unwrap();
    assert!(account.is_contract());
    let meta = db.contract(&derived).unwrap().unwrap();
    assert_eq!(meta.deployer, deployer);
    assert_eq!(meta.creation_tx, tx.hash());
}

#[test]
fn creation_honors_an_explicit_address() {
    let db = Arc::new(StateDb::new());
    let deployer = addr(0x5a);
    seed_account(&db, deployer, 100);

    let explicit = addr(0x77);
    let tx = create_tx(deployer, vec![0x60], Some(explicit));
    let machine = machine_returning(ExecutionResult::successful());

    let mut state = State::new(db.clone());
    let mut executive =
        Executive::for_block(&tx, Env::default(), &machine, &mut state);
    executive.dispatch().unwrap();
    executive.run();
    let outcome = executive.finalize().unwrap();

    assert!(outcome.successful());
    assert_eq!(db.code(&explicit).unwrap(), Some(vec![0x60]));
    let derived = allocator::derive_contract_address(&deployer);
    assert_eq!(db.account(&derived).unwrap(), None);
}

#[test]
fn native_transfer_commits_in_block_mode() {
    let db = Arc::new(StateDb::new());
    seed_account(&db, addr(1), 50);

    let machine = machine_returning(ExecutionResult::successful());
    let tx = transfer_tx(addr(1), addr(2), 20);

    let mut state = State::new(db.clone());
    let mut executive =
        Executive::for_block(&tx, Env::default(), &machine, &mut state);
    executive.dispatch().unwrap();
    executive.run();
    let outcome = executive.finalize().unwrap();

    assert!(outcome.successful());
    assert!(outcome.result().is_none());
    assert_eq!(outcome.operation_notes().len(), 1);
    assert_eq!(
        db.account(&addr(1)).unwrap().unwrap().balance,
        U256::from(30)
    );
    assert_eq!(
        db.account(&addr(2)).unwrap().unwrap().balance,
        U256::from(20)
    );
}

#[test]
fn native_transfer_does_not_commit_outside_block_mode() {
    let db = Arc::new(StateDb::new());
    seed_account(&db, addr(1), 50);

    let machine = machine_returning(ExecutionResult::successful());
    let tx = transfer_tx(addr(1), addr(2), 20);

    let mut state = State::new(db.clone());
    let mut executive =
        Executive::for_pre_validation(&tx, &machine, &mut state);
    executive.dispatch().unwrap();
    executive.run();
    let outcome = executive.finalize().unwrap();

    assert!(outcome.successful());
    assert_eq!(state.balance(&addr(1)).unwrap(), U256::from(30));
    assert_eq!(
        db.account(&addr(1)).unwrap().unwrap().balance,
        U256::from(50)
    );
}

#[test]
fn faulting_handler_discards_all_handler_effects() {
    let db = Arc::new(StateDb::new());
    seed_account(&db, addr(1), 50);

    let machine = machine_returning(ExecutionResult::successful());
    // First handler is fine; the second asks for more than the sender
    // holds and must fail validation.
    let tx = Transaction::new(vec![
        Request::Transfer(TransferRequest {
            owner_address: addr(1),
            to_address: addr(2),
            amount: U256::from(20),
        }),
        Request::Transfer(TransferRequest {
            owner_address: addr(1),
            to_address: addr(3),
            amount: U256::from(100),
        }),
    ]);

    let mut state = State::new(db.clone());
    let mut executive =
        Executive::for_block(&tx, Env::default(), &machine, &mut state);
    executive.dispatch().unwrap();
    executive.run();
    let outcome = executive.finalize().unwrap();

    assert!(!outcome.successful());
    assert!(outcome
        .error_message()
        .contains("insufficient balance"));
    // The first handler's effect reached the overlay...
    assert_eq!(state.balance(&addr(1)).unwrap(), U256::from(30));
    assert_eq!(outcome.operation_notes().len(), 1);
    // ...but nothing was committed.
    assert_eq!(
        db.account(&addr(1)).unwrap().unwrap().balance,
        U256::from(50)
    );
    assert_eq!(db.account(&addr(2)).unwrap(), None);
    assert_eq!(db.account(&addr(3)).unwrap(), None);
}

#[test]
fn disabled_vm_completes_as_an_empty_success() {
    let db = Arc::new(StateDb::new());
    let target = addr(0x20);
    seed_contract(&db, target, vec![0x60]);

    let params = CommonParams {
        vm_enabled: false,
        ..Default::default()
    };
    // Would revert if the interpreter ever ran.
    let machine = Machine::new(
        params,
        VmFactory::new(|_params| {
            Box::new(StubVm {
                result: ExecutionResult::reverted(),
            }) as Box<dyn Exec>
        }),
    );

    let tx = call_tx(addr(1), target);
    let mut state = State::new(db);
    let mut executive =
        Executive::for_block(&tx, Env::default(), &machine, &mut state);
    executive.dispatch().unwrap();
    executive.run();
    let outcome = executive.finalize().unwrap();

    assert!(outcome.successful());
    assert_eq!(
        outcome.result(),
        Some(&ExecutionResult::successful())
    );
}

#[test]
fn empty_transaction_takes_the_native_path() {
    let db = Arc::new(StateDb::new());
    let machine = machine_returning(ExecutionResult::successful());
    let tx = Transaction::new(vec![]);

    let mut state = State::new(db);
    let mut executive =
        Executive::for_block(&tx, Env::default(), &machine, &mut state);
    executive.dispatch().unwrap();
    executive.run();
    let outcome = executive.finalize().unwrap();

    assert!(outcome.successful());
    assert!(outcome.result().is_none());
    assert!(outcome.operation_notes().is_empty());
}
