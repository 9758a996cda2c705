// Copyright 2024 Helios Foundation. All rights reserved.
// Helios is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

pub mod execution_outcome;
#[cfg(test)]
mod tests;

pub use execution_outcome::ExecutionOutcome;

use crate::{
    allocator,
    machine::{Exec, Machine},
    native::{self, OperationSink},
    state::{DbResult, State},
};
use helios_vm_types::{
    deployed_code, ActionKind, ActionParams, Env, ExecutionResult,
    ExecutionStatus,
};
use primitives::{AccountKind, ContractMeta, Request, Transaction};
use std::sync::Arc;

/// How durable this run's state changes are allowed to become.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Execution as part of confirming a block; a successful run commits
    /// the overlay.
    Block,
    /// Speculative execution ahead of block assembly; the overlay is
    /// caller-owned and the caller decides whether to commit it.
    PreValidation,
    /// Read-only query; never commits.
    Constant,
}

/// What kind of work the transaction requires, derived once from its
/// first request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionKind {
    NativeOperation,
    ContractCreation,
    ContractCall,
}

/// Pure classification: contract requests map to their kinds, everything
/// else takes the native path.
pub fn transaction_kind(tx: &Transaction) -> TransactionKind {
    match tx.first_request() {
        Some(Request::CreateContract(_)) => TransactionKind::ContractCreation,
        Some(Request::CallContract(_)) => TransactionKind::ContractCall,
        _ => TransactionKind::NativeOperation,
    }
}

/// Transaction executor: bound to one transaction, one execution mode
/// and one state overlay. The caller drives `dispatch`, `run`,
/// `finalize` in that order; `finalize` consumes the executive, so the
/// sequence cannot be re-entered. Faults from the native path and the
/// interpreter are captured here and never propagate as errors; only
/// backend database failures do.
pub struct Executive<'a> {
    tx: &'a Transaction,
    machine: &'a Machine,
    state: &'a mut State,
    env: Env,
    mode: ExecutionMode,
    kind: TransactionKind,
    vm: Option<Box<dyn Exec>>,
    result: Option<ExecutionResult>,
    /// Fault sink, alive from construction whether or not an
    /// interpreter ever exists for this transaction.
    fault: Option<String>,
    sink: OperationSink,
}

impl<'a> Executive<'a> {
    /// For a block's transaction run.
    pub fn for_block(
        tx: &'a Transaction, env: Env, machine: &'a Machine,
        state: &'a mut State,
    ) -> Executive<'a> {
        Self::new(tx, env, ExecutionMode::Block, machine, state)
    }

    /// For speculative execution ahead of block assembly.
    pub fn for_pre_validation(
        tx: &'a Transaction, machine: &'a Machine, state: &'a mut State,
    ) -> Executive<'a> {
        Self::new(
            tx,
            Env::default(),
            ExecutionMode::PreValidation,
            machine,
            state,
        )
    }

    /// For a read-only query.
    pub fn for_constant(
        tx: &'a Transaction, machine: &'a Machine, state: &'a mut State,
    ) -> Executive<'a> {
        Self::new(tx, Env::default(), ExecutionMode::Constant, machine, state)
    }

    fn new(
        tx: &'a Transaction, env: Env, mode: ExecutionMode,
        machine: &'a Machine, state: &'a mut State,
    ) -> Executive<'a> {
        Executive {
            tx,
            machine,
            state,
            env,
            mode,
            kind: transaction_kind(tx),
            vm: None,
            result: None,
            fault: None,
            sink: OperationSink::default(),
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Routes the transaction: applies the native handlers, or prepares
    /// (without running) the interpreter for a contract creation or
    /// call. Nothing here makes overlay mutations durable.
    pub fn dispatch(&mut self) -> DbResult<()> {
        match self.kind {
            TransactionKind::NativeOperation => self.exec_native_operations(),
            TransactionKind::ContractCreation => self.create(),
            TransactionKind::ContractCall => self.call(),
        }
    }

    fn exec_native_operations(&mut self) -> DbResult<()> {
        for operation in native::catalog_for(self.tx) {
            if let Err(fault) = operation.validate(self.state)? {
                self.record_fault(fault.to_string());
                return Ok(());
            }
            if let Err(fault) =
                operation.apply(self.state, &mut self.sink)?
            {
                self.record_fault(fault.to_string());
                return Ok(());
            }
        }
        Ok(())
    }

    fn create(&mut self) -> DbResult<()> {
        let tx = self.tx;
        let request = match tx.first_request() {
            Some(Request::CreateContract(request)) => request,
            _ => return Ok(()),
        };

        let new_address = match request.contract_address {
            Some(address) => address,
            None => {
                match allocator::allocate_contract_address(
                    &request.owner_address,
                    self.state,
                )? {
                    Ok(address) => address,
                    Err(exhaustion) => {
                        self.record_fault(exhaustion.to_string());
                        return Ok(());
                    }
                }
            }
        };

        self.state
            .create_account(new_address, AccountKind::Contract)?;
        self.state.create_contract(
            new_address,
            ContractMeta {
                deployer: request.owner_address,
                creation_tx: tx.hash(),
                abi: request.abi.clone(),
            },
        )?;
        self.state
            .save_code(new_address, deployed_code(&request.bytecode))?;

        let params = ActionParams {
            sender: request.owner_address,
            address: new_address,
            value: Default::default(),
            code: Arc::new(request.bytecode.clone()),
            data: None,
            kind: ActionKind::Create,
        };
        self.vm = Some(self.machine.vm_factory().create(params));
        Ok(())
    }

    fn call(&mut self) -> DbResult<()> {
        let tx = self.tx;
        let request = match tx.first_request() {
            Some(Request::CallContract(request)) => request,
            _ => return Ok(()),
        };

        let code = match self.state.code(&request.contract_address)? {
            Some(code) if !code.is_empty() => code,
            _ => {
                trace!(
                    "call target {:?} holds no code; nothing to execute",
                    request.contract_address
                );
                return Ok(());
            }
        };

        let params = ActionParams {
            sender: request.owner_address,
            address: request.contract_address,
            value: request.call_value,
            code: Arc::new(code),
            data: Some(request.data.clone()),
            kind: ActionKind::Call,
        };
        self.vm = Some(self.machine.vm_factory().create(params));
        Ok(())
    }

    /// Runs the prepared interpreter to completion. A no-op when
    /// dispatch prepared none.
    pub fn run(&mut self) {
        let Some(mut vm) = self.vm.take() else {
            return;
        };
        let result = if self.machine.params().vm_enabled {
            vm.run_to_completion(self.state, &self.env)
        } else {
            trace!("virtual machine disabled; skipping interpreter run");
            ExecutionResult::successful()
        };
        self.result = Some(result);
    }

    /// Applies the commit-or-discard decision and yields the final
    /// outcome. Consuming the executive makes the decision single-shot.
    pub fn finalize(mut self) -> DbResult<ExecutionOutcome> {
        let mut runtime_error = self.fault.take();

        match self.result.as_mut() {
            None => {
                // Native path, or a call to a codeless address. Only a
                // block-context run with no recorded fault persists the
                // handlers' effects; a fault discards them all together.
                if runtime_error.is_none() && self.mode == ExecutionMode::Block
                {
                    self.state.commit()?;
                }
            }
            Some(result) => {
                let status = result.status.clone();
                match status {
                    ExecutionStatus::Failed(error) => {
                        result.discard_effects();
                        runtime_error = Some(error.to_string());
                    }
                    ExecutionStatus::Reverted => {
                        result.discard_effects();
                        runtime_error = Some("execution reverted".into());
                    }
                    ExecutionStatus::Success => {
                        if self.mode == ExecutionMode::Block {
                            self.state.commit()?;
                        }
                    }
                }
            }
        }

        let outcome = ExecutionOutcome::new(
            self.result,
            runtime_error,
            self.sink.into_notes(),
        );
        outcome.log(self.tx);
        Ok(outcome)
    }

    fn record_fault(&mut self, message: String) {
        debug!("execution fault captured: {}", message);
        if self.fault.is_none() {
            self.fault = Some(message);
        }
    }
}
